//! Variant scoring for PlateForge.
//!
//! A variant's score is a linear, auditable sum of five capped terms:
//!
//! | term | formula | cap |
//! |---|---|---|
//! | units | `total_units × 0.5` | 30 |
//! | FSI | `min(1, fsi / max_fsi) × 25` | 25 |
//! | coverage | `min(1, coverage / max_coverage) × 15` | 15 |
//! | efficiency | `efficiency × 20` | 20 |
//! | mix | `max(0, 10 − mix_error / 10)` | 10 |
//!
//! Scores rank variants of one site against each other; they are not
//! comparable across sites.

mod mix;
mod scorer;

pub use mix::{actual_percentages, mix_error};
pub use scorer::{ScoreInputs, VariantScorer};
