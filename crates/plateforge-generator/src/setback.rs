//! SetbackEngine - erodes the site polygon into the buildable region.

use geo::{Area, Buffer, MultiPolygon, Polygon};
use plateforge_config::Setbacks;
use plateforge_core::{Bounds, SitePolygon};
use thiserror::Error;

/// Smallest buildable region worth laying out, in square meters.
pub const MIN_BUILDABLE_AREA: f64 = 100.0;

/// Fragments below this area are numerical noise from the offset.
const SLIVER_AREA: f64 = 1e-6;

/// Why a site has no buildable region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoBuildableRegion {
    #[error("setbacks consume the whole site")]
    Collapsed,

    #[error("setbacks split the site into {pieces} disjoint pieces")]
    Split { pieces: usize },

    #[error("buildable area {area:.1} sqm below {MIN_BUILDABLE_AREA} sqm")]
    TooSmall { area: f64 },
}

/// The single connected polygon left after setbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildableRegion {
    polygon: Polygon<f64>,
    area: f64,
    bounds: Bounds,
}

impl BuildableRegion {
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Axis-aligned bounds; envelopes are sized and centered from these.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Inward offset of the site boundary by the mean configured setback.
///
/// # Examples
///
/// ```
/// use plateforge_config::Setbacks;
/// use plateforge_core::SitePolygon;
/// use plateforge_generator::SetbackEngine;
///
/// let site = SitePolygon::rectangle(40.0, 30.0).unwrap();
/// let region = SetbackEngine::new(&Setbacks::uniform(3.0)).erode(&site).unwrap();
///
/// assert!((region.area() - 816.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetbackEngine {
    distance: f64,
    min_area: f64,
}

impl SetbackEngine {
    pub fn new(setbacks: &Setbacks) -> Self {
        Self::with_distance(setbacks.mean())
    }

    pub fn with_distance(distance: f64) -> Self {
        Self {
            distance,
            min_area: MIN_BUILDABLE_AREA,
        }
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Computes the buildable region of `site`.
    pub fn erode(&self, site: &SitePolygon) -> Result<BuildableRegion, NoBuildableRegion> {
        let eroded = if self.distance > 0.0 {
            site.polygon().buffer(-self.distance)
        } else {
            MultiPolygon::new(vec![site.polygon().clone()])
        };

        let mut pieces: Vec<Polygon<f64>> = eroded
            .into_iter()
            .filter(|p| p.unsigned_area() > SLIVER_AREA)
            .collect();

        match pieces.len() {
            0 => Err(NoBuildableRegion::Collapsed),
            1 => {
                let polygon = pieces.remove(0);
                let area = polygon.unsigned_area();
                if area < self.min_area {
                    return Err(NoBuildableRegion::TooSmall { area });
                }
                let bounds = Bounds::of(&MultiPolygon::new(vec![polygon.clone()]))
                    .ok_or(NoBuildableRegion::Collapsed)?;
                Ok(BuildableRegion {
                    polygon,
                    area,
                    bounds,
                })
            }
            n => Err(NoBuildableRegion::Split { pieces: n }),
        }
    }
}
