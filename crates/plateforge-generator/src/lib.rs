//! PlateForge variant generation engine.
//!
//! This crate turns a site boundary and a unit program into ranked building
//! variants:
//! - [`SetbackEngine`] - buildable region after setbacks
//! - [`ShapeSynthesizer`] - building envelopes (Linear, L, U, H, Courtyard, T, Plus)
//! - [`FloorPlateLayoutEngine`] - core, corridor and greedy unit packing
//! - [`FloorReplicator`] - typical floor stacked over every floor
//! - [`VariantGenerator`] - template sweep, randomized fallback, ranking
//! - [`GeneratorScope`] and [`termination`] - seeded randomness and run bounds

pub mod error;
pub mod generator;
pub mod layout;
pub mod replicate;
pub mod request;
pub mod scope;
pub mod setback;
pub mod shape;
pub mod statistics;
pub mod termination;

pub use error::AttemptError;
pub use generator::{option_label, GenerationPhase, VariantGenerator, DEFAULT_MAX_FALLBACK_ATTEMPTS};
pub use layout::{FloorPlateLayoutEngine, TemplatePool};
pub use replicate::FloorReplicator;
pub use request::{GenerationReport, GenerationRequest, GenerationStatus};
pub use scope::GeneratorScope;
pub use setback::{BuildableRegion, NoBuildableRegion, SetbackEngine, MIN_BUILDABLE_AREA};
pub use shape::{Envelope, ShapeSynthesizer, MIN_ENVELOPE_AREA};
pub use statistics::GenerationStatistics;
pub use termination::{
    AttemptCountTermination, ExternalTermination, OrTermination, Termination, TimeTermination,
};
