//! OR composition of termination conditions.

use super::Termination;
use crate::scope::GeneratorScope;

/// Combines a tuple of terminations; terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use plateforge_generator::termination::{
///     AttemptCountTermination, OrTermination, TimeTermination,
/// };
///
/// // Stop after 30 seconds OR 100 attempts
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     AttemptCountTermination::new(100),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &GeneratorScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
