//! Failure modes of a single generation attempt.

use thiserror::Error;

/// Why one shape/corridor attempt produced no variant.
///
/// Recoverable failures are skipped locally; the rest abort the randomized
/// fallback loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttemptError {
    /// The site has no buildable region after setbacks.
    #[error("no buildable region")]
    NoBuildableRegion,

    /// The synthesized envelope is below the minimum footprint.
    #[error("envelope area {area:.1} sqm below minimum")]
    EnvelopeTooSmall { area: f64 },

    /// Packing placed no unit on the floor plate.
    #[error("no units placed")]
    NoUnitsPlaced,

    /// The geometry kernel returned an empty or unusable shape.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    /// A catalog entry required for layout is missing.
    #[error("catalog entry missing: {0}")]
    MissingCatalogEntry(String),
}

impl AttemptError {
    /// True for outcomes that only rule out this one attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AttemptError::EnvelopeTooSmall { .. } | AttemptError::NoUnitsPlaced
        )
    }
}
