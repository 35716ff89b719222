//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::GeneratorScope;

/// Terminates after a wall-clock limit, measured from [`GeneratorScope::start`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use plateforge_generator::termination::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(30));
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &GeneratorScope) -> bool {
        scope.elapsed().is_some_and(|e| e >= self.limit)
    }
}
