//! Domain model for floor-plate generation.
//!
//! Static catalog entries ([`UnitTemplate`], [`CoreTemplate`]) describe what
//! can be built; placed entities ([`PlacedUnit`], [`PlacedCore`], [`Corridor`])
//! are created fresh for every layout attempt and owned by exactly one
//! [`FloorPlateResult`].

mod circulation;
mod floor;
mod program;
mod shape;
mod site;
mod unit;
mod variant;

#[cfg(test)]
mod tests;

pub use circulation::{CoreTemplate, Corridor, PlacedCore};
pub use floor::FloorPlateResult;
pub use program::UnitProgram;
pub use shape::{BuildingShape, CorridorType, Facing, VentilationSides};
pub use site::SitePolygon;
pub use unit::{PlacedUnit, UnitTemplate};
pub use variant::{BuildingVariant, UnitMix};
