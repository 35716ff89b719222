//! Run-level scope: random source, clock, counters and termination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use plateforge_config::GeneratorConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::statistics::GenerationStatistics;
use crate::termination::{AttemptCountTermination, OrTermination, Termination, TimeTermination};

/// Mutable state threaded through one generation run.
///
/// The scope owns the only random source a run draws from, so two runs with
/// the same seed and inputs produce identical variants.
#[derive(Debug)]
pub struct GeneratorScope {
    rng: ChaCha8Rng,
    start_time: Option<Instant>,
    attempt_count: u64,
    termination: Option<Box<dyn Termination>>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
    statistics: GenerationStatistics,
}

impl GeneratorScope {
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            start_time: None,
            attempt_count: 0,
            termination: None,
            terminate_early_flag: None,
            statistics: GenerationStatistics::default(),
        }
    }

    /// Seeds the random source and installs the configured termination.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut scope = match config.random_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };

        let limits = config.termination.as_ref();
        let time = limits.and_then(|t| t.time_limit());
        let attempts = limits.and_then(|t| t.attempt_count_limit);

        scope.termination = match (time, attempts) {
            (Some(limit), Some(count)) => Some(Box::new(OrTermination((
                TimeTermination::new(limit),
                AttemptCountTermination::new(count),
            )))),
            (Some(limit), None) => Some(Box::new(TimeTermination::new(limit))),
            (None, Some(count)) => Some(Box::new(AttemptCountTermination::new(count))),
            (None, None) => None,
        };
        scope
    }

    pub fn with_termination<T: Termination + 'static>(mut self, termination: T) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Resets the clock and the attempt counter.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.attempt_count = 0;
        self.statistics = GenerationStatistics::default();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn increment_attempt_count(&mut self) -> u64 {
        self.attempt_count += 1;
        self.attempt_count
    }

    pub fn attempt_count(&self) -> u64 {
        self.attempt_count
    }

    /// True when the early flag is set or the installed termination fires.
    pub fn should_terminate(&self) -> bool {
        self.is_terminate_early()
            || self
                .termination
                .as_ref()
                .is_some_and(|t| t.is_terminated(self))
    }

    pub fn statistics(&self) -> &GenerationStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut GenerationStatistics {
        &mut self.statistics
    }

    /// Snapshot of the statistics with the elapsed time filled in.
    pub fn finish(&mut self) -> GenerationStatistics {
        self.statistics.elapsed_ms = self
            .elapsed()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        self.statistics.clone()
    }
}

impl Default for GeneratorScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plateforge_config::TerminationConfig;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GeneratorScope::with_seed(42);
        let mut b = GeneratorScope::with_seed(42);
        let xs: Vec<u32> = (0..8).map(|_| a.rng().random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_start_resets_counters() {
        let mut scope = GeneratorScope::with_seed(1);
        scope.increment_attempt_count();
        scope.statistics_mut().record_accepted();
        scope.start();
        assert_eq!(scope.attempt_count(), 0);
        assert_eq!(scope.statistics().accepted, 0);
        assert!(scope.elapsed().is_some());
    }

    #[test]
    fn test_from_config_installs_attempt_limit() {
        let config = GeneratorConfig {
            random_seed: Some(3),
            termination: Some(TerminationConfig {
                attempt_count_limit: Some(2),
                ..TerminationConfig::default()
            }),
            ..GeneratorConfig::default()
        };
        let mut scope = GeneratorScope::from_config(&config);
        scope.start();
        assert!(!scope.should_terminate());
        scope.increment_attempt_count();
        scope.increment_attempt_count();
        assert!(scope.should_terminate());
    }

    #[test]
    fn test_from_config_without_limits_never_terminates() {
        let mut scope = GeneratorScope::from_config(&GeneratorConfig::default());
        scope.start();
        for _ in 0..1000 {
            scope.increment_attempt_count();
        }
        assert!(!scope.should_terminate());
    }

    #[test]
    fn test_terminate_early_flag() {
        let mut scope = GeneratorScope::with_seed(1);
        let flag = Arc::new(AtomicBool::new(false));
        scope.set_terminate_early_flag(Arc::clone(&flag));
        assert!(!scope.should_terminate());
        flag.store(true, Ordering::SeqCst);
        assert!(scope.should_terminate());
    }
}
