//! Planar geometry helpers.
//!
//! All shapes are `geo` polygons in a local metric frame (meters). Helpers
//! here never mutate their inputs; every operation returns a new value.

use geo::{Area, BooleanOps, BoundingRect, Centroid, Coord, LineString, MultiPolygon, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Relative tolerance used when comparing areas produced by boolean ops.
pub const AREA_TOLERANCE: f64 = 1e-6;

/// Axis-aligned bounds of a shape.
///
/// # Examples
///
/// ```
/// use plateforge_core::geometry::{rect, Bounds};
/// use geo::MultiPolygon;
///
/// let shape = MultiPolygon::new(vec![rect(2.0, 1.0, 12.0, 6.0)]);
/// let bounds = Bounds::of(&shape).unwrap();
///
/// assert_eq!(bounds.width(), 10.0);
/// assert_eq!(bounds.depth(), 5.0);
/// assert_eq!(bounds.center(), (7.0, 3.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from two corners, normalizing their order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Returns the bounding box of a shape, or `None` for an empty shape.
    pub fn of(shape: &MultiPolygon<f64>) -> Option<Self> {
        shape.bounding_rect().map(Self::from)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.min_x + self.width() / 2.0,
            self.min_y + self.depth() / 2.0,
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        rect(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.min().x, r.min().y, r.max().x, r.max().y)
    }
}

/// Builds an axis-aligned rectangle polygon.
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 }).to_polygon()
}

/// Builds a hole-free polygon from an ordered ring. The ring is closed
/// automatically when the last point differs from the first.
pub fn polygon_from_ring(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(LineString::from(points.to_vec()), vec![])
}

/// Total unsigned area of a shape.
pub fn area(shape: &MultiPolygon<f64>) -> f64 {
    shape.unsigned_area()
}

/// Area centroid of a shape, falling back to the bounds center for
/// degenerate input.
pub fn centroid(shape: &MultiPolygon<f64>) -> Option<(f64, f64)> {
    shape
        .centroid()
        .map(|p| (p.x(), p.y()))
        .or_else(|| Bounds::of(shape).map(|b| b.center()))
}

/// Exterior ring of the largest polygon in `shape`, closed, as plain points.
pub fn exterior_ring(shape: &MultiPolygon<f64>) -> Vec<(f64, f64)> {
    shape
        .0
        .iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
        .map(|p| p.exterior().coords().map(|c| (c.x, c.y)).collect())
        .unwrap_or_default()
}

/// Fraction of `part`'s area lying inside `whole`, in `[0, 1]`.
pub fn covered_fraction(part: &Polygon<f64>, whole: &MultiPolygon<f64>) -> f64 {
    let part_area = part.unsigned_area();
    if part_area <= 0.0 {
        return 0.0;
    }
    (part.intersection(whole).unsigned_area() / part_area).clamp(0.0, 1.0)
}

/// Returns true when `part` lies inside `whole` up to [`AREA_TOLERANCE`].
pub fn is_covered(part: &Polygon<f64>, whole: &MultiPolygon<f64>) -> bool {
    covered_fraction(part, whole) >= 1.0 - AREA_TOLERANCE
}
