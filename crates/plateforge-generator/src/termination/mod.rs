//! Termination conditions for a generation run.
//!
//! Conditions are checked before every attempt. A run that terminates early
//! still ranks and returns whatever variants it already has.

mod attempt_count;
mod composite;
mod external;
mod time;

use std::fmt::Debug;

use crate::scope::GeneratorScope;

pub use attempt_count::AttemptCountTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop generating.
pub trait Termination: Send + Debug {
    /// Returns true if generation should stop.
    fn is_terminated(&self, scope: &GeneratorScope) -> bool;
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &GeneratorScope) -> bool {
        (**self).is_terminated(scope)
    }
}
