//! Complete building design variants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::floor::FloorPlateResult;
use super::shape::{BuildingShape, CorridorType};
use crate::score::ScoreBreakdown;

/// Unit label → unit count across all residential floors.
pub type UnitMix = BTreeMap<String, u32>;

/// A complete design: one envelope, one corridor strategy, every floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingVariant {
    pub id: String,
    pub name: String,
    pub shape: BuildingShape,
    pub corridor_type: CorridorType,
    pub floors: Vec<FloorPlateResult>,
    pub total_units: u32,
    pub unit_mix: UnitMix,
    pub total_built_up_area: f64,
    pub total_carpet_area: f64,
    pub fsi_achieved: f64,
    pub ground_coverage: f64,
    /// Set when the stacked height exceeds the regulation height limit.
    #[serde(default)]
    pub height_exceeded: bool,
    pub score: f64,
    pub score_breakdown: ScoreBreakdown,
}

impl BuildingVariant {
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// The first residential floor, from which all others were stamped.
    pub fn typical_floor(&self) -> Option<&FloorPlateResult> {
        self.floors.first()
    }

    pub fn units_per_floor(&self) -> usize {
        self.typical_floor().map_or(0, FloorPlateResult::unit_count)
    }
}
