//! Regulation, program and catalog fixtures.

use plateforge_config::{RegulationConstraints, Setbacks};
use plateforge_core::{UnitCatalog, UnitProgram};

/// `(40 - 6) x (30 - 6)`: the buildable area of a 40 x 30 site with a
/// uniform 3 m setback.
pub const SCENARIO_A_BUILDABLE_AREA: f64 = 816.0;

/// Default regulations with the same setback on every edge.
pub fn uniform_regulations(setback: f64) -> RegulationConstraints {
    RegulationConstraints::default().with_setbacks(Setbacks::uniform(setback))
}

/// Program from `(key, percent)` pairs, in order.
pub fn program(shares: &[(&str, f64)]) -> UnitProgram {
    shares.iter().map(|&(key, share)| (key, share)).collect()
}

/// `{"2BHK": 60, "1BHK": 40}`.
pub fn two_one_program() -> UnitProgram {
    program(&[("2BHK", 60.0), ("1BHK", 40.0)])
}

/// Catalog holding only the standard 3BHK template.
pub fn three_bhk_catalog() -> UnitCatalog {
    let standard = UnitCatalog::standard();
    let three = standard.get("3BHK").cloned();
    UnitCatalog::from_templates(three).expect("single template")
}
