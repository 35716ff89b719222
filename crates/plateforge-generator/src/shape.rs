//! ShapeSynthesizer - building envelopes inside the buildable region.
//!
//! Every envelope is centered on the buildable region's bounding-box center,
//! sized by a width and depth factor, and scaled down about its centroid when
//! it would breach the ground-coverage limit.

use geo::{BooleanOps, Coord, MultiPolygon, Polygon, Scale};
use plateforge_config::RegulationConstraints;
use plateforge_core::geometry::{self, rect};
use plateforge_core::{Bounds, BuildingShape};
use rand::Rng;

use crate::error::AttemptError;

/// Smallest envelope footprint worth laying out, in square meters.
pub const MIN_ENVELOPE_AREA: f64 = 100.0;

/// Size factor used for deterministic attempts.
pub const NOMINAL_SIZE_FACTOR: f64 = 0.9;

/// Range of size factors drawn for randomized attempts.
pub const RANDOM_SIZE_FACTORS: std::ops::RangeInclusive<f64> = 0.7..=1.0;

/// Margin applied on top of the exact coverage-fitting scale.
const COVERAGE_MARGIN: f64 = 0.95;

/// A synthesized building footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    shape: BuildingShape,
    footprint: MultiPolygon<f64>,
    area: f64,
    bounds: Bounds,
    scale: Option<f64>,
}

impl Envelope {
    pub fn shape(&self) -> BuildingShape {
        self.shape
    }

    pub fn footprint(&self) -> &MultiPolygon<f64> {
        &self.footprint
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Area centroid, falling back to the bounds center.
    pub fn centroid(&self) -> (f64, f64) {
        geometry::centroid(&self.footprint).unwrap_or_else(|| self.bounds.center())
    }

    /// Coverage scale factor, when the envelope had to be shrunk.
    pub fn coverage_scale(&self) -> Option<f64> {
        self.scale
    }
}

/// Builds envelopes for one site under one set of regulations.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSynthesizer<'a> {
    regulations: &'a RegulationConstraints,
    site_area: f64,
}

impl<'a> ShapeSynthesizer<'a> {
    pub fn new(regulations: &'a RegulationConstraints, site_area: f64) -> Self {
        Self {
            regulations,
            site_area,
        }
    }

    /// Synthesizes `shape` inside `region`.
    ///
    /// Deterministic attempts use [`NOMINAL_SIZE_FACTOR`] for both axes and
    /// never touch `rng`; randomized attempts draw each factor from
    /// [`RANDOM_SIZE_FACTORS`].
    pub fn synthesize<R: Rng>(
        &self,
        shape: BuildingShape,
        region: Bounds,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Envelope, AttemptError> {
        let (width_factor, depth_factor) = if randomize {
            (
                rng.random_range(RANDOM_SIZE_FACTORS),
                rng.random_range(RANDOM_SIZE_FACTORS),
            )
        } else {
            (NOMINAL_SIZE_FACTOR, NOMINAL_SIZE_FACTOR)
        };

        let width = region.width() * width_factor;
        let depth = (region.depth() * depth_factor).min(self.regulations.max_envelope_depth());
        if width <= 0.0 || depth <= 0.0 {
            return Err(AttemptError::Degenerate(format!(
                "{shape} envelope of {width:.2} x {depth:.2}"
            )));
        }

        let (cx, cy) = region.center();
        let outline = outline(shape, width, depth, cx, cy);
        let (footprint, scale) = self.fit_coverage(outline);

        let area = geometry::area(&footprint);
        if area < MIN_ENVELOPE_AREA {
            return Err(AttemptError::EnvelopeTooSmall { area });
        }
        let bounds = Bounds::of(&footprint)
            .ok_or_else(|| AttemptError::Degenerate(format!("{shape} envelope is empty")))?;

        Ok(Envelope {
            shape,
            footprint,
            area,
            bounds,
            scale,
        })
    }

    /// Shrinks `footprint` about its centroid so that coverage lands below
    /// the limit.
    fn fit_coverage(&self, footprint: MultiPolygon<f64>) -> (MultiPolygon<f64>, Option<f64>) {
        if self.site_area <= 0.0 {
            return (footprint, None);
        }
        let coverage = geometry::area(&footprint) / self.site_area;
        let limit = self.regulations.max_coverage;
        if coverage <= limit {
            return (footprint, None);
        }

        let factor = (limit / coverage).sqrt() * COVERAGE_MARGIN;
        match geometry::centroid(&footprint) {
            Some((x, y)) => {
                let scaled = footprint.scale_around_point(factor, factor, Coord { x, y });
                (scaled, Some(factor))
            }
            None => (footprint, None),
        }
    }
}

/// Outline of `shape` in a `width` x `depth` box centered on `(cx, cy)`.
///
/// Component rectangles overlap where they meet so the union is a single
/// polygon.
fn outline(shape: BuildingShape, width: f64, depth: f64, cx: f64, cy: f64) -> MultiPolygon<f64> {
    let x0 = cx - width / 2.0;
    let x1 = cx + width / 2.0;
    let y0 = cy - depth / 2.0;
    let y1 = cy + depth / 2.0;

    match shape {
        BuildingShape::Linear => single(rect(x0, y0, x1, y1)),
        BuildingShape::LShape => {
            let wing_width = width * 0.4;
            let wing_depth = depth * 0.6;
            union(&[
                rect(x0, y0, x1, y1 - wing_depth / 2.0),
                rect(x1 - wing_width, y0, x1, y1),
            ])
        }
        BuildingShape::UShape => {
            let wing_width = width * 0.25;
            let base_depth = depth * 0.25;
            union(&[
                rect(x0, y0, x0 + wing_width, y1),
                rect(x1 - wing_width, y0, x1, y1),
                rect(x0, y0, x1, y0 + base_depth),
            ])
        }
        BuildingShape::HShape => {
            let wing_width = width * 0.35;
            let bar_depth = depth * 0.3;
            union(&[
                rect(x0, y0, x0 + wing_width, y1),
                rect(x1 - wing_width, y0, x1, y1),
                rect(x0, cy - bar_depth / 2.0, x1, cy + bar_depth / 2.0),
            ])
        }
        BuildingShape::Courtyard => {
            let side = width.min(depth) * 0.3;
            let court = rect(cx - side / 2.0, cy - side / 2.0, cx + side / 2.0, cy + side / 2.0);
            rect(x0, y0, x1, y1).difference(&court)
        }
        BuildingShape::TShape => {
            let bar_depth = depth * 0.35;
            let stem_width = width * 0.35;
            union(&[
                rect(x0, y1 - bar_depth, x1, y1),
                rect(cx - stem_width / 2.0, y0, cx + stem_width / 2.0, y1),
            ])
        }
        BuildingShape::Plus => {
            let arm_depth = depth * 0.4;
            let arm_width = width * 0.4;
            union(&[
                rect(x0, cy - arm_depth / 2.0, x1, cy + arm_depth / 2.0),
                rect(cx - arm_width / 2.0, y0, cx + arm_width / 2.0, y1),
            ])
        }
    }
}

fn single(polygon: Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon])
}

fn union(parts: &[Polygon<f64>]) -> MultiPolygon<f64> {
    parts
        .iter()
        .fold(MultiPolygon::new(vec![]), |acc, part| acc.union(&single(part.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plateforge_config::Setbacks;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn region() -> Bounds {
        Bounds::new(3.0, 3.0, 37.0, 27.0)
    }

    fn regulations() -> RegulationConstraints {
        RegulationConstraints::default()
            .with_setbacks(Setbacks::uniform(3.0))
            .with_max_coverage(1.0)
    }

    fn nominal(shape: BuildingShape, regs: &RegulationConstraints, site_area: f64) -> Envelope {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        ShapeSynthesizer::new(regs, site_area)
            .synthesize(shape, region(), false, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_linear_is_nominal_box() {
        let regs = regulations();
        let envelope = nominal(BuildingShape::Linear, &regs, 1200.0);
        let bounds = envelope.bounds();
        assert!((bounds.width() - 30.6).abs() < 1e-9);
        assert!((bounds.depth() - 21.6).abs() < 1e-9);
        let (cx, cy) = bounds.center();
        assert!((cx - 20.0).abs() < 1e-9 && (cy - 15.0).abs() < 1e-9);
        assert!(envelope.coverage_scale().is_none());
    }

    #[test]
    fn test_depth_is_capped() {
        let regs = regulations();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tall = Bounds::new(0.0, 0.0, 40.0, 100.0);
        let envelope = ShapeSynthesizer::new(&regs, 10_000.0)
            .synthesize(BuildingShape::Linear, tall, false, &mut rng)
            .unwrap();
        assert!((envelope.bounds().depth() - regs.max_envelope_depth()).abs() < 1e-9);
    }

    #[test]
    fn test_every_shape_is_one_polygon_within_nominal_box() {
        let regs = regulations();
        for shape in BuildingShape::ALL {
            let envelope = nominal(shape, &regs, 1200.0);
            assert_eq!(envelope.footprint().0.len(), 1, "{shape}");
            assert!(envelope.area() <= 30.6 * 21.6 + 1e-6, "{shape}");
            assert_eq!(envelope.shape(), shape);
        }
    }

    #[test]
    fn test_l_shape_area() {
        let regs = regulations();
        let envelope = nominal(BuildingShape::LShape, &regs, 1200.0);
        // Main block 30.6 x (21.6 - 6.48) plus the wing's upper 0.4w x 6.48.
        let expected = 30.6 * (21.6 - 6.48) + 0.4 * 30.6 * 6.48;
        assert!((envelope.area() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_courtyard_has_hole() {
        let regs = regulations();
        let envelope = nominal(BuildingShape::Courtyard, &regs, 1200.0);
        let side = 21.6 * 0.3;
        assert!((envelope.area() - (30.6 * 21.6 - side * side)).abs() < 1e-6);
        assert_eq!(envelope.footprint().0[0].interiors().len(), 1);
    }

    #[test]
    fn test_coverage_scaling() {
        let regs = RegulationConstraints::default().with_max_coverage(0.5);
        let envelope = nominal(BuildingShape::Linear, &regs, 1200.0);
        assert!(envelope.coverage_scale().is_some());
        assert!(envelope.area() / 1200.0 <= 0.5);
        assert!((envelope.area() / 1200.0 - 0.5 * 0.95 * 0.95).abs() < 1e-9);
        let (cx, cy) = envelope.centroid();
        assert!((cx - 20.0).abs() < 1e-9 && (cy - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_region_is_rejected() {
        let regs = regulations();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = ShapeSynthesizer::new(&regs, 200.0).synthesize(
            BuildingShape::Linear,
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            false,
            &mut rng,
        );
        assert!(matches!(result, Err(AttemptError::EnvelopeTooSmall { .. })));
    }

    #[test]
    fn test_randomized_factors_stay_in_range() {
        let regs = regulations();
        let synthesizer = ShapeSynthesizer::new(&regs, 1200.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let envelope = synthesizer
                .synthesize(BuildingShape::Linear, region(), true, &mut rng)
                .unwrap();
            let bounds = envelope.bounds();
            assert!(bounds.width() >= 34.0 * 0.7 - 1e-9 && bounds.width() <= 34.0 + 1e-9);
            assert!(bounds.depth() >= 24.0 * 0.7 - 1e-9 && bounds.depth() <= 24.0 + 1e-9);
        }
    }
}
