//! Attempt count termination.

use super::Termination;
use crate::scope::GeneratorScope;

/// Terminates once the run has made `limit` attempts, sweep and fallback
/// combined.
#[derive(Debug, Clone)]
pub struct AttemptCountTermination {
    limit: u64,
}

impl AttemptCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for AttemptCountTermination {
    fn is_terminated(&self, scope: &GeneratorScope) -> bool {
        scope.attempt_count() >= self.limit
    }
}
