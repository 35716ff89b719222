//! Shape and corridor classification enums.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Building floor-plate envelope templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingShape {
    /// Simple rectangle (I-shape).
    Linear,
    /// Main block with a wing in the far corner.
    LShape,
    /// Two side wings joined by a bottom wing.
    UShape,
    /// Two side wings joined by a central connector.
    HShape,
    /// Rectangle with a central void.
    Courtyard,
    /// Full-width top bar over a central stem.
    TShape,
    /// Cross of a horizontal and a vertical band.
    Plus,
}

impl BuildingShape {
    /// Shapes tried by the template sweep and the random fallback, in order.
    pub const SWEEP: [BuildingShape; 3] = [
        BuildingShape::Linear,
        BuildingShape::LShape,
        BuildingShape::UShape,
    ];

    /// Every shape the synthesizer knows.
    pub const ALL: [BuildingShape; 7] = [
        BuildingShape::Linear,
        BuildingShape::LShape,
        BuildingShape::UShape,
        BuildingShape::HShape,
        BuildingShape::Courtyard,
        BuildingShape::TShape,
        BuildingShape::Plus,
    ];

    /// Wire identifier, e.g. `"l_shape"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingShape::Linear => "linear",
            BuildingShape::LShape => "l_shape",
            BuildingShape::UShape => "u_shape",
            BuildingShape::HShape => "h_shape",
            BuildingShape::Courtyard => "courtyard",
            BuildingShape::TShape => "t_shape",
            BuildingShape::Plus => "plus",
        }
    }

    /// Human-readable title, e.g. `"L Shape"`.
    pub fn title(&self) -> &'static str {
        match self {
            BuildingShape::Linear => "Linear",
            BuildingShape::LShape => "L Shape",
            BuildingShape::UShape => "U Shape",
            BuildingShape::HShape => "H Shape",
            BuildingShape::Courtyard => "Courtyard",
            BuildingShape::TShape => "T Shape",
            BuildingShape::Plus => "Plus",
        }
    }
}

impl fmt::Display for BuildingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corridor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorridorType {
    /// Units on one side only (better light, less efficient).
    #[serde(rename = "single")]
    SingleLoaded,
    /// Units on both sides of a central corridor.
    #[serde(rename = "double")]
    DoubleLoaded,
}

impl CorridorType {
    /// Corridor types tried by the template sweep, in order.
    pub const SWEEP: [CorridorType; 2] = [CorridorType::DoubleLoaded, CorridorType::SingleLoaded];

    pub fn as_str(&self) -> &'static str {
        match self {
            CorridorType::SingleLoaded => "single",
            CorridorType::DoubleLoaded => "double",
        }
    }

    /// Number of unit rows served by the corridor.
    pub fn loaded_sides(&self) -> usize {
        match self {
            CorridorType::SingleLoaded => 1,
            CorridorType::DoubleLoaded => 2,
        }
    }
}

impl fmt::Display for CorridorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compass side of a unit with an external opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

/// Ventilated sides of a placed unit. Never more than three in practice.
pub type VentilationSides = SmallVec<[Facing; 3]>;
