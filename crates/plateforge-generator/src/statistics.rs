//! Counters collected over one generation run.

use serde::{Deserialize, Serialize};

/// Run-level statistics, reported alongside the ranked variants.
///
/// # Example
///
/// ```
/// use plateforge_generator::GenerationStatistics;
///
/// let mut stats = GenerationStatistics::default();
/// stats.record_attempt(false);
/// stats.record_attempt(true);
/// stats.record_accepted();
/// stats.record_skipped();
///
/// assert_eq!(stats.sweep_attempts, 1);
/// assert_eq!(stats.fallback_attempts, 1);
/// assert_eq!(stats.total_attempts(), 2);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatistics {
    /// Deterministic attempts made by the template sweep.
    pub sweep_attempts: u64,
    /// Randomized attempts made by the fallback.
    pub fallback_attempts: u64,
    /// Attempts that produced a variant.
    pub accepted: u64,
    /// Attempts skipped without a variant.
    pub skipped: u64,
    /// True when the fallback stopped on an unrecoverable error.
    pub fallback_aborted: bool,
    /// True when a termination condition cut the run short.
    pub terminated_early: bool,
    pub elapsed_ms: u64,
}

impl GenerationStatistics {
    pub fn record_attempt(&mut self, randomized: bool) {
        if randomized {
            self.fallback_attempts += 1;
        } else {
            self.sweep_attempts += 1;
        }
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn total_attempts(&self) -> u64 {
        self.sweep_attempts + self.fallback_attempts
    }

    /// Accepted / attempted, zero before any attempt.
    pub fn acceptance_rate(&self) -> f64 {
        let total = self.total_attempts();
        if total == 0 {
            0.0
        } else {
            self.accepted as f64 / total as f64
        }
    }
}
