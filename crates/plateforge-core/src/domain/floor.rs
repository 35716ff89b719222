//! Per-story layout result.

use serde::{Deserialize, Serialize};

use super::circulation::{Corridor, PlacedCore};
use super::unit::PlacedUnit;

/// One floor's full layout.
///
/// `efficiency` is `usable_area / total_area` and always lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlateResult {
    pub floor_number: u32,
    pub units: Vec<PlacedUnit>,
    pub cores: Vec<PlacedCore>,
    pub corridors: Vec<Corridor>,
    pub boundary_polygon: Vec<(f64, f64)>,
    pub total_area: f64,
    pub usable_area: f64,
    pub efficiency: f64,
}

impl FloorPlateResult {
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn core_area(&self) -> f64 {
        self.cores.iter().map(PlacedCore::footprint_area).sum()
    }

    pub fn corridor_area(&self) -> f64 {
        self.corridors.iter().map(Corridor::footprint_area).sum()
    }
}
