//! Wire-format tests for generated output.

use plateforge::prelude::*;
use plateforge_test::{rectangular_site, two_one_program, uniform_regulations};

fn report() -> GenerationReport {
    let config = PlateForgeConfig::new()
        .with_random_seed(11)
        .with_regulations(uniform_regulations(3.0));
    let request = GenerationRequest::new(two_one_program()).with_variants(7);
    generate_floor_plate_variants(rectangular_site(40.0, 30.0), &request, &config).unwrap()
}

#[test]
fn report_round_trips_through_json() {
    let report = report();
    let json = serde_json::to_string(&report).unwrap();
    let back: GenerationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn variant_wire_schema() {
    let report = report();
    let value = serde_json::to_value(&report.variants[0]).unwrap();

    for key in [
        "id",
        "name",
        "shape",
        "corridorType",
        "floors",
        "totalUnits",
        "unitMix",
        "totalBuiltUpArea",
        "totalCarpetArea",
        "fsiAchieved",
        "groundCoverage",
        "score",
        "scoreBreakdown",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }

    let floor = &value["floors"][0];
    for key in ["floorNumber", "units", "cores", "corridors", "boundaryPolygon", "totalArea", "usableArea", "efficiency"] {
        assert!(floor.get(key).is_some(), "missing floors[].{key}");
    }
    assert_eq!(floor["cores"][0]["id"], "core-1");
    assert!(floor["corridors"][0]["type"].is_string());
    assert!(floor["units"][0]["unitTypeId"].is_string());
    assert!(floor["boundaryPolygon"][0].is_array());
}

#[test]
fn request_accepts_partial_json() {
    let request: GenerationRequest = serde_json::from_str(r#"{"numVariants": 2}"#).unwrap();
    assert_eq!(request.num_variants, 2);
    assert_eq!(request.num_floors, 10);
    assert_eq!(request.unit_program, UnitProgram::standard());
}
