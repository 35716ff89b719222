//! Explainable variant score.

use serde::{Deserialize, Serialize};

/// Upper bound of every variant score.
pub const MAX_SCORE: f64 = 100.0;

/// Per-term breakdown of a variant score.
///
/// Each term is capped before summation and the total is clamped to
/// `[0, MAX_SCORE]`. `mix_score` is `None` when no mix term applied (empty
/// target mix or zero placed units).
///
/// # Examples
///
/// ```
/// use plateforge_core::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown::new(30.0, 25.0, 15.0, 20.0, Some(10.0));
/// assert_eq!(breakdown.total, 100.0);
///
/// let partial = ScoreBreakdown::new(10.0, 5.0, 0.0, 8.0, None);
/// assert_eq!(partial.total, 23.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub unit_score: f64,
    pub fsi_score: f64,
    pub coverage_score: f64,
    pub efficiency_score: f64,
    pub mix_score: Option<f64>,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Sums the terms and clamps the total.
    pub fn new(
        unit_score: f64,
        fsi_score: f64,
        coverage_score: f64,
        efficiency_score: f64,
        mix_score: Option<f64>,
    ) -> Self {
        let sum = unit_score + fsi_score + coverage_score + efficiency_score + mix_score.unwrap_or(0.0);
        let total = if sum.is_finite() {
            sum.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
        Self {
            unit_score,
            fsi_score,
            coverage_score,
            efficiency_score,
            mix_score,
            total,
        }
    }
}
