//! Site boundary input.

use geo::{Area, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::{PlateForgeError, Result};
use crate::geometry::polygon_from_ring;

/// Site boundary in local planar meters.
///
/// Constructed once from an ordered ring and immutable afterwards. On the
/// wire it is a plain array of `[x, y]` points without the closing point.
///
/// # Examples
///
/// ```
/// use plateforge_core::domain::SitePolygon;
///
/// let site = SitePolygon::rectangle(40.0, 30.0).unwrap();
/// assert_eq!(site.area(), 1200.0);
///
/// assert!(SitePolygon::from_ring([(0.0, 0.0), (1.0, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct SitePolygon {
    polygon: Polygon<f64>,
}

impl SitePolygon {
    /// Builds a site from an ordered ring of at least three points.
    pub fn from_ring(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let mut points: Vec<(f64, f64)> = points.into_iter().collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(PlateForgeError::InvalidSite(format!(
                "site needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(PlateForgeError::InvalidSite(
                "site contains non-finite coordinates".to_string(),
            ));
        }

        let polygon = polygon_from_ring(&points);
        if polygon.unsigned_area() <= 0.0 {
            return Err(PlateForgeError::InvalidSite("site has zero area".to_string()));
        }
        Ok(Self { polygon })
    }

    /// Axis-aligned `width × depth` site anchored at the origin.
    pub fn rectangle(width: f64, depth: f64) -> Result<Self> {
        Self::from_ring([(0.0, 0.0), (width, 0.0), (width, depth), (0.0, depth)])
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn area(&self) -> f64 {
        self.polygon.unsigned_area()
    }

    /// Ring points without the closing duplicate.
    pub fn ring(&self) -> Vec<(f64, f64)> {
        let coords = &self.polygon.exterior().0;
        let open = coords.len().saturating_sub(1);
        coords[..open].iter().map(|c| (c.x, c.y)).collect()
    }
}

impl TryFrom<Vec<(f64, f64)>> for SitePolygon {
    type Error = PlateForgeError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self> {
        Self::from_ring(points)
    }
}

impl From<SitePolygon> for Vec<(f64, f64)> {
    fn from(site: SitePolygon) -> Self {
        site.ring()
    }
}
