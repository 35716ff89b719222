//! PlateForge - residential floor-plate variant generation in Rust
//!
//! Give it a site boundary, regulations and a unit program; get back ranked
//! building variants with per-floor geometry, metrics and scores.
//!
//! # Example
//!
//! ```rust
//! use plateforge::prelude::*;
//!
//! let site = SitePolygon::rectangle(40.0, 30.0).unwrap();
//! let config = PlateForgeConfig::new()
//!     .with_random_seed(7)
//!     .with_regulations(RegulationConstraints::default().with_setbacks(Setbacks::uniform(3.0)));
//! let request = GenerationRequest::new(UnitProgram::new().with("2BHK", 60.0).with("1BHK", 40.0));
//!
//! let report = generate_floor_plate_variants(site, &request, &config).unwrap();
//! assert_eq!(report.status, GenerationStatus::Generated);
//! assert!(report.variants.iter().all(|v| v.score <= 100.0));
//! ```

// Domain model and catalogs
pub use plateforge_core::{
    geometry, Bounds, BuildingShape, BuildingVariant, CoreCatalog, CoreTemplate, Corridor,
    CorridorType, Facing, FloorPlateResult, PlacedCore, PlacedUnit, PlateForgeError, Result,
    ScoreBreakdown, SitePolygon, UnitCatalog, UnitMix, UnitProgram, UnitTemplate,
};

// Configuration
pub use plateforge_config::{
    ConfigError, GeneratorConfig, MixStrategy, PlateForgeConfig, RegulationConstraints, Setbacks,
    TerminationConfig,
};

// Scoring
pub use plateforge_scoring::{ScoreInputs, VariantScorer};

// Generation engine
pub use plateforge_generator::{
    termination, AttemptError, BuildableRegion, Envelope, FloorPlateLayoutEngine,
    FloorReplicator, GenerationReport, GenerationRequest, GenerationStatistics, GenerationStatus,
    GeneratorScope, NoBuildableRegion, SetbackEngine, ShapeSynthesizer, VariantGenerator,
};

mod generate;
pub use generate::{generate_floor_plate_variants, load_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{generate_floor_plate_variants, load_config};
    pub use super::{
        BuildingShape, BuildingVariant, CorridorType, FloorPlateResult, SitePolygon, UnitProgram,
    };
    pub use super::{GenerationReport, GenerationRequest, GenerationStatus, GeneratorScope};
    pub use super::{PlateForgeConfig, RegulationConstraints, Setbacks};
    pub use super::{PlateForgeError, Result, VariantGenerator};
}
