//! PlateForge Core - data model, catalogs and geometry helpers
//!
//! This crate provides the fundamental building blocks for floor-plate
//! generation:
//! - Geometry helpers over `geo` polygons
//! - Domain types for units, cores, corridors, floors and variants
//! - Static unit and core catalogs
//! - The explainable score breakdown type

pub mod catalog;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod score;

pub use catalog::{CoreCatalog, UnitCatalog};
pub use domain::{
    BuildingShape, BuildingVariant, CoreTemplate, Corridor, CorridorType, Facing,
    FloorPlateResult, PlacedCore, PlacedUnit, SitePolygon, UnitMix, UnitProgram, UnitTemplate,
    VentilationSides,
};
pub use error::{PlateForgeError, Result};
pub use geometry::Bounds;
pub use score::{ScoreBreakdown, MAX_SCORE};
