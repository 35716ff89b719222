//! Generation request and report types.

use plateforge_core::{BuildingVariant, PlateForgeError, Result, UnitProgram};
use serde::{Deserialize, Serialize};

use crate::statistics::GenerationStatistics;

/// What to generate for one site.
///
/// Every field is optional on the wire.
///
/// # Examples
///
/// ```
/// use plateforge_generator::GenerationRequest;
///
/// let request: GenerationRequest =
///     serde_json::from_str(r#"{"unitProgram": {"3BHK": 100}, "numFloors": 12}"#).unwrap();
///
/// assert_eq!(request.num_floors, 12);
/// assert_eq!(request.num_variants, 5);
/// assert!(request.stilt_parking);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationRequest {
    pub unit_program: UnitProgram,
    pub num_floors: u32,
    pub num_variants: usize,
    pub stilt_parking: bool,
}

impl GenerationRequest {
    pub fn new(unit_program: UnitProgram) -> Self {
        Self {
            unit_program,
            ..Self::default()
        }
    }

    pub fn with_floors(mut self, num_floors: u32) -> Self {
        self.num_floors = num_floors;
        self
    }

    pub fn with_variants(mut self, num_variants: usize) -> Self {
        self.num_variants = num_variants;
        self
    }

    pub fn with_stilt_parking(mut self, stilt_parking: bool) -> Self {
        self.stilt_parking = stilt_parking;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_floors == 0 {
            return Err(PlateForgeError::InvalidRequest(
                "num_floors must be at least 1".to_string(),
            ));
        }
        if self.num_variants == 0 {
            return Err(PlateForgeError::InvalidRequest(
                "num_variants must be at least 1".to_string(),
            ));
        }
        if let Some((key, share)) = self.unit_program.iter().find(|(_, s)| !s.is_finite()) {
            return Err(PlateForgeError::InvalidRequest(format!(
                "unit program share for '{key}' is {share}"
            )));
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            unit_program: UnitProgram::standard(),
            num_floors: 10,
            num_variants: 5,
            stilt_parking: true,
        }
    }
}

/// Overall outcome of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// At least one variant was produced.
    Generated,
    /// Setbacks leave no usable buildable region.
    NoBuildableArea,
    /// The site is buildable but every attempt was skipped.
    NoFeasibleVariant,
}

/// Ranked variants plus the context a caller needs to explain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub status: GenerationStatus,
    pub site_area: f64,
    pub buildable_area: f64,
    pub variants: Vec<BuildingVariant>,
    pub statistics: GenerationStatistics,
    pub message: String,
}

impl GenerationReport {
    pub fn is_generated(&self) -> bool {
        self.status == GenerationStatus::Generated
    }

    pub fn best(&self) -> Option<&BuildingVariant> {
        self.variants.first()
    }
}
