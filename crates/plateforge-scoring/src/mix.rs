//! Unit-mix deviation.

use indexmap::IndexMap;
use plateforge_core::{UnitMix, UnitProgram};

/// Share of each label in `actual`, as percentages of all units.
pub fn actual_percentages(actual: &UnitMix) -> IndexMap<String, f64> {
    let total: u32 = actual.values().sum();
    if total == 0 {
        return IndexMap::new();
    }
    actual
        .iter()
        .map(|(label, count)| (label.clone(), f64::from(*count) * 100.0 / f64::from(total)))
        .collect()
}

/// Sum over requested types of `|actual% − target%|`, both normalized to 100.
///
/// Returns `None` when the target mix is empty or no units were placed.
///
/// # Examples
///
/// ```
/// use plateforge_core::{UnitMix, UnitProgram};
/// use plateforge_scoring::mix_error;
///
/// let target = UnitProgram::new().with("2BHK", 60.0).with("1BHK", 40.0);
/// let actual: UnitMix = [("2BHK".to_string(), 30), ("1BHK".to_string(), 10)]
///     .into_iter()
///     .collect();
///
/// // 75% vs 60% and 25% vs 40%
/// assert_eq!(mix_error(&actual, &target), Some(30.0));
/// assert_eq!(mix_error(&UnitMix::new(), &target), None);
/// ```
pub fn mix_error(actual: &UnitMix, target: &UnitProgram) -> Option<f64> {
    let total_target = target.total();
    let total_actual: u32 = actual.values().sum();
    if total_target <= 0.0 || total_actual == 0 {
        return None;
    }

    let error = target
        .iter()
        .map(|(label, share)| {
            let count = actual.get(label).copied().unwrap_or(0);
            let actual_pct = f64::from(count) * 100.0 / f64::from(total_actual);
            let target_pct = share.max(0.0) * 100.0 / total_target;
            (actual_pct - target_pct).abs()
        })
        .sum();
    Some(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(entries: &[(&str, u32)]) -> UnitMix {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_exact_match_has_zero_error() {
        let target = UnitProgram::new().with("3BHK", 100.0);
        assert_eq!(mix_error(&mix(&[("3BHK", 20)]), &target), Some(0.0));
    }

    #[test]
    fn test_unnormalized_target() {
        let target = UnitProgram::new().with("2BHK", 3.0).with("1BHK", 1.0);
        let error = mix_error(&mix(&[("2BHK", 3), ("1BHK", 1)]), &target).unwrap();
        assert!(error.abs() < 1e-9);
    }

    #[test]
    fn test_missing_type_counts_fully() {
        let target = UnitProgram::new().with("2BHK", 50.0).with("3BHK", 50.0);
        let error = mix_error(&mix(&[("2BHK", 10)]), &target).unwrap();
        assert!((error - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_share_entry_penalizes_placed_units() {
        let target = UnitProgram::new().with("2BHK", 100.0).with("1BHK", 0.0);
        let error = mix_error(&mix(&[("2BHK", 5), ("1BHK", 5)]), &target).unwrap();
        assert!((error - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(mix_error(&mix(&[("2BHK", 4)]), &UnitProgram::new()), None);
    }

    #[test]
    fn test_actual_percentages() {
        let pct = actual_percentages(&mix(&[("1BHK", 1), ("2BHK", 3)]));
        assert_eq!(pct["1BHK"], 25.0);
        assert_eq!(pct["2BHK"], 75.0);
        assert!(actual_percentages(&UnitMix::new()).is_empty());
    }
}
