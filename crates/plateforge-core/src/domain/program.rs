//! Requested unit mix.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Target unit mix: unit-type key → requested percentage.
///
/// Percentages need not sum to 100; consumers normalize. Insertion order is
/// preserved because deterministic packing cycles through the program in the
/// order it was given.
///
/// # Examples
///
/// ```
/// use plateforge_core::domain::UnitProgram;
///
/// let program = UnitProgram::new().with("2BHK", 3.0).with("1BHK", 1.0);
/// let normalized = program.normalized();
///
/// assert_eq!(normalized["2BHK"], 75.0);
/// assert_eq!(normalized["1BHK"], 25.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitProgram {
    shares: IndexMap<String, f64>,
}

impl UnitProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default residential mix: 40% 2BHK, 40% 3BHK, 20% 1BHK.
    pub fn standard() -> Self {
        Self::new()
            .with("2BHK", 40.0)
            .with("3BHK", 40.0)
            .with("1BHK", 20.0)
    }

    /// Adds or replaces a share.
    pub fn with(mut self, key: impl Into<String>, percent: f64) -> Self {
        self.shares.insert(key.into(), percent);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.shares.get(key).copied()
    }

    /// Entries in request order, including non-positive ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.shares.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries with a strictly positive share, in request order.
    pub fn positive(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, pct)| *pct > 0.0)
    }

    /// Sum of positive shares.
    pub fn total(&self) -> f64 {
        self.positive().map(|(_, pct)| pct).sum()
    }

    /// True when no entry has a positive share.
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Positive shares rescaled to sum to 100.
    pub fn normalized(&self) -> IndexMap<String, f64> {
        let total = self.total();
        if total <= 0.0 {
            return IndexMap::new();
        }
        self.positive()
            .map(|(key, pct)| (key.to_string(), pct / total * 100.0))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for UnitProgram {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            shares: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
