//! Tests for the domain model.

use super::*;
use crate::score::ScoreBreakdown;
use smallvec::smallvec;

fn sample_unit() -> PlacedUnit {
    PlacedUnit {
        id: "unit-0".to_string(),
        unit_type_id: "2bhk-std".to_string(),
        x: 1.5,
        y: 2.0,
        width: 8.5,
        depth: 7.5,
        rotation: 0.0,
        floor: 1,
        has_balcony: false,
        ventilation_sides: smallvec![Facing::North],
    }
}

#[test]
fn test_shape_wire_names() {
    let json = serde_json::to_string(&BuildingShape::LShape).unwrap();
    assert_eq!(json, "\"l_shape\"");
    for shape in BuildingShape::ALL {
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, format!("\"{}\"", shape.as_str()));
    }
}

#[test]
fn test_shape_titles() {
    assert_eq!(BuildingShape::Linear.title(), "Linear");
    assert_eq!(BuildingShape::UShape.title(), "U Shape");
}

#[test]
fn test_corridor_wire_names() {
    assert_eq!(serde_json::to_string(&CorridorType::DoubleLoaded).unwrap(), "\"double\"");
    assert_eq!(serde_json::to_string(&CorridorType::SingleLoaded).unwrap(), "\"single\"");
    assert_eq!(CorridorType::DoubleLoaded.loaded_sides(), 2);
}

#[test]
fn test_sweep_order() {
    assert_eq!(
        BuildingShape::SWEEP,
        [BuildingShape::Linear, BuildingShape::LShape, BuildingShape::UShape]
    );
    assert_eq!(
        CorridorType::SWEEP,
        [CorridorType::DoubleLoaded, CorridorType::SingleLoaded]
    );
}

#[test]
fn test_placed_unit_camel_case() {
    let value = serde_json::to_value(sample_unit()).unwrap();
    assert_eq!(value["unitTypeId"], "2bhk-std");
    assert_eq!(value["hasBalcony"], false);
    assert_eq!(value["ventilationSides"], serde_json::json!(["N"]));
}

#[test]
fn test_placed_unit_on_floor_copies() {
    let unit = sample_unit();
    let upper = unit.on_floor(7);
    assert_eq!(upper.floor, 7);
    assert_eq!(upper.x, unit.x);
    assert_eq!(unit.floor, 1);
}

#[test]
fn test_core_span_overlap() {
    let template = CoreTemplate::new("core-medium", 5.0, 7.0, 2, 2);
    let core = PlacedCore::centered("core-1", &template, 10.0, 10.0);
    assert_eq!(core.left(), 7.5);
    assert_eq!(core.right(), 12.5);
    assert!(core.overlaps_span(5.0, 8.0));
    assert!(!core.overlaps_span(12.5, 15.0));
    assert!(!core.overlaps_span(2.0, 7.5));
}

#[test]
fn test_corridor_type_field_name() {
    let corridor = Corridor {
        x: 0.0,
        y: 5.0,
        width: 20.0,
        depth: 1.8,
        corridor_type: CorridorType::DoubleLoaded,
    };
    let value = serde_json::to_value(&corridor).unwrap();
    assert_eq!(value["type"], "double");
    assert!((corridor.top() - 6.8).abs() < 1e-9);
}

#[test]
fn test_program_keeps_request_order() {
    let program: UnitProgram = [("3BHK", 10.0), ("1BHK", 30.0), ("2BHK", 60.0)]
        .into_iter()
        .collect();
    let keys: Vec<&str> = program.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["3BHK", "1BHK", "2BHK"]);
}

#[test]
fn test_program_ignores_non_positive_shares() {
    let program = UnitProgram::new().with("2BHK", 50.0).with("4BHK", 0.0);
    assert_eq!(program.total(), 50.0);
    assert_eq!(program.normalized().len(), 1);
    assert!(UnitProgram::new().with("2BHK", 0.0).is_empty());
}

#[test]
fn test_program_json_is_plain_map() {
    let program: UnitProgram = serde_json::from_str(r#"{"2BHK":60,"1BHK":40}"#).unwrap();
    assert_eq!(program.get("2BHK"), Some(60.0));
    let keys: Vec<&str> = program.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["2BHK", "1BHK"]);
}

#[test]
fn test_site_requires_three_points() {
    assert!(SitePolygon::from_ring([(0.0, 0.0), (5.0, 0.0)]).is_err());
}

#[test]
fn test_site_drops_closing_point() {
    let site =
        SitePolygon::from_ring([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (0.0, 0.0)]).unwrap();
    assert_eq!(site.ring().len(), 4);
    assert_eq!(site.area(), 12.0);
}

#[test]
fn test_site_rejects_collinear_points() {
    assert!(SitePolygon::from_ring([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).is_err());
}

#[test]
fn test_site_rejects_nan() {
    assert!(SitePolygon::from_ring([(0.0, 0.0), (f64::NAN, 0.0), (2.0, 2.0)]).is_err());
}

#[test]
fn test_site_json_roundtrip() {
    let site = SitePolygon::rectangle(40.0, 30.0).unwrap();
    let json = serde_json::to_string(&site).unwrap();
    assert_eq!(json, "[[0.0,0.0],[40.0,0.0],[40.0,30.0],[0.0,30.0]]");
    let back: SitePolygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, site);
}

#[test]
fn test_site_json_rejects_degenerate() {
    let result: Result<SitePolygon, _> = serde_json::from_str("[[0.0,0.0],[1.0,1.0]]");
    assert!(result.is_err());
}

#[test]
fn test_variant_json_roundtrip() {
    let floor = FloorPlateResult {
        floor_number: 1,
        units: vec![sample_unit()],
        cores: vec![],
        corridors: vec![],
        boundary_polygon: vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        total_area: 100.0,
        usable_area: 63.75,
        efficiency: 0.6375,
    };
    let variant = BuildingVariant {
        id: "variant-1".to_string(),
        name: "Option A: Linear".to_string(),
        shape: BuildingShape::Linear,
        corridor_type: CorridorType::DoubleLoaded,
        floors: vec![floor],
        total_units: 1,
        unit_mix: [("2BHK".to_string(), 1)].into_iter().collect(),
        total_built_up_area: 200.0,
        total_carpet_area: 65.0,
        fsi_achieved: 0.5,
        ground_coverage: 0.25,
        height_exceeded: false,
        score: 42.0,
        score_breakdown: ScoreBreakdown::new(0.5, 5.0, 7.5, 12.75, None),
    };

    let json = serde_json::to_string(&variant).unwrap();
    let back: BuildingVariant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, variant);
    assert_eq!(back.units_per_floor(), 1);
}
