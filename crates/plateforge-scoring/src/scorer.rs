//! VariantScorer - five-term linear score.

use plateforge_config::RegulationConstraints;
use plateforge_core::{ScoreBreakdown, UnitMix, UnitProgram};

use crate::mix::mix_error;

const UNIT_SCORE_CAP: f64 = 30.0;
const UNIT_SCORE_PER_UNIT: f64 = 0.5;
const FSI_WEIGHT: f64 = 25.0;
const COVERAGE_WEIGHT: f64 = 15.0;
const EFFICIENCY_WEIGHT: f64 = 20.0;
const MIX_WEIGHT: f64 = 10.0;
const MIX_ERROR_DIVISOR: f64 = 10.0;

/// Aggregate metrics of one variant, as seen by the scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub total_units: u32,
    pub fsi_achieved: f64,
    pub ground_coverage: f64,
    pub efficiency: f64,
    pub unit_mix: &'a UnitMix,
    pub target_mix: &'a UnitProgram,
}

/// Scores variants against one site's FSI and coverage limits.
///
/// Scoring never fails: degenerate inputs zero the affected term.
///
/// # Examples
///
/// ```
/// use plateforge_core::{UnitMix, UnitProgram};
/// use plateforge_scoring::{ScoreInputs, VariantScorer};
///
/// let scorer = VariantScorer::new(2.5, 0.5);
/// let mix: UnitMix = [("3BHK".to_string(), 40)].into_iter().collect();
/// let target = UnitProgram::new().with("3BHK", 100.0);
///
/// let breakdown = scorer.score(&ScoreInputs {
///     total_units: 40,
///     fsi_achieved: 2.5,
///     ground_coverage: 0.25,
///     efficiency: 0.5,
///     unit_mix: &mix,
///     target_mix: &target,
/// });
///
/// assert_eq!(breakdown.unit_score, 20.0);
/// assert_eq!(breakdown.fsi_score, 25.0);
/// assert_eq!(breakdown.coverage_score, 7.5);
/// assert_eq!(breakdown.efficiency_score, 10.0);
/// assert_eq!(breakdown.mix_score, Some(10.0));
/// assert_eq!(breakdown.total, 72.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantScorer {
    max_fsi: f64,
    max_coverage: f64,
}

impl VariantScorer {
    pub fn new(max_fsi: f64, max_coverage: f64) -> Self {
        Self {
            max_fsi,
            max_coverage,
        }
    }

    pub fn from_regulations(regulations: &RegulationConstraints) -> Self {
        Self::new(regulations.max_fsi, regulations.max_coverage)
    }

    /// Computes every term and the clamped total.
    pub fn score(&self, inputs: &ScoreInputs<'_>) -> ScoreBreakdown {
        let unit_score = (f64::from(inputs.total_units) * UNIT_SCORE_PER_UNIT).min(UNIT_SCORE_CAP);
        let fsi_score = utilization(inputs.fsi_achieved, self.max_fsi) * FSI_WEIGHT;
        let coverage_score = utilization(inputs.ground_coverage, self.max_coverage) * COVERAGE_WEIGHT;
        let efficiency_score = unit_interval(inputs.efficiency) * EFFICIENCY_WEIGHT;
        let mix_score = mix_error(inputs.unit_mix, inputs.target_mix)
            .map(|error| (MIX_WEIGHT - error / MIX_ERROR_DIVISOR).max(0.0));

        ScoreBreakdown::new(
            unit_score,
            fsi_score,
            coverage_score,
            efficiency_score,
            mix_score,
        )
    }
}

/// `min(1, achieved / limit)`, zero for a non-positive limit or bad input.
fn utilization(achieved: f64, limit: f64) -> f64 {
    if limit <= 0.0 || !limit.is_finite() {
        return 0.0;
    }
    unit_interval(achieved / limit)
}

fn unit_interval(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs<'a>(units: u32, mix: &'a UnitMix, target: &'a UnitProgram) -> ScoreInputs<'a> {
        ScoreInputs {
            total_units: units,
            fsi_achieved: 1.0,
            ground_coverage: 0.4,
            efficiency: 0.6,
            unit_mix: mix,
            target_mix: target,
        }
    }

    #[test]
    fn test_unit_score_caps_at_thirty() {
        let scorer = VariantScorer::new(2.5, 0.5);
        let mix = UnitMix::new();
        let target = UnitProgram::new();
        assert_eq!(scorer.score(&inputs(200, &mix, &target)).unit_score, 30.0);
        assert_eq!(scorer.score(&inputs(10, &mix, &target)).unit_score, 5.0);
    }

    #[test]
    fn test_fsi_above_limit_is_capped() {
        let scorer = VariantScorer::new(2.0, 0.5);
        let mix = UnitMix::new();
        let target = UnitProgram::new();
        let mut i = inputs(0, &mix, &target);
        i.fsi_achieved = 4.0;
        assert_eq!(scorer.score(&i).fsi_score, 25.0);
    }

    #[test]
    fn test_empty_target_omits_mix_term() {
        let scorer = VariantScorer::new(2.5, 0.5);
        let mix: UnitMix = [("2BHK".to_string(), 10)].into_iter().collect();
        let target = UnitProgram::new();
        assert_eq!(scorer.score(&inputs(10, &mix, &target)).mix_score, None);
    }

    #[test]
    fn test_zero_units_omit_mix_term() {
        let scorer = VariantScorer::new(2.5, 0.5);
        let mix = UnitMix::new();
        let target = UnitProgram::new().with("2BHK", 100.0);
        let breakdown = scorer.score(&inputs(0, &mix, &target));
        assert_eq!(breakdown.mix_score, None);
        assert_eq!(breakdown.unit_score, 0.0);
    }

    #[test]
    fn test_large_mix_error_floors_at_zero() {
        let scorer = VariantScorer::new(2.5, 0.5);
        let mix: UnitMix = [("1RK".to_string(), 10)].into_iter().collect();
        let target = UnitProgram::new().with("4BHK", 100.0);
        assert_eq!(scorer.score(&inputs(10, &mix, &target)).mix_score, Some(0.0));
    }

    #[test]
    fn test_zero_limits_do_not_divide() {
        let scorer = VariantScorer::new(0.0, 0.0);
        let mix = UnitMix::new();
        let target = UnitProgram::new();
        let breakdown = scorer.score(&inputs(4, &mix, &target));
        assert_eq!(breakdown.fsi_score, 0.0);
        assert_eq!(breakdown.coverage_score, 0.0);
    }

    #[test]
    fn test_from_regulations() {
        let scorer = VariantScorer::from_regulations(&RegulationConstraints::default());
        assert_eq!(scorer, VariantScorer::new(2.5, 0.5));
    }

    proptest! {
        #[test]
        fn score_is_bounded(
            units in 0u32..10_000,
            fsi in 0.0f64..20.0,
            coverage in 0.0f64..1.0,
            efficiency in 0.0f64..1.0,
            placed_2bhk in 0u32..500,
            placed_3bhk in 0u32..500,
            share in 0.0f64..100.0,
        ) {
            let scorer = VariantScorer::new(2.5, 0.5);
            let mix: UnitMix = [
                ("2BHK".to_string(), placed_2bhk),
                ("3BHK".to_string(), placed_3bhk),
            ]
            .into_iter()
            .collect();
            let target = UnitProgram::new().with("2BHK", share).with("1BHK", 100.0 - share);
            let breakdown = scorer.score(&ScoreInputs {
                total_units: units,
                fsi_achieved: fsi,
                ground_coverage: coverage,
                efficiency,
                unit_mix: &mix,
                target_mix: &target,
            });
            prop_assert!(breakdown.total >= 0.0);
            prop_assert!(breakdown.total <= 100.0);
        }
    }
}
