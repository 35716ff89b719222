//! Tests for floor plate layout.

use super::*;
use crate::shape::ShapeSynthesizer;
use plateforge_config::Setbacks;
use plateforge_core::geometry::is_covered;
use plateforge_core::{Bounds, BuildingShape};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SITE_AREA: f64 = 1200.0;

fn regulations() -> RegulationConstraints {
    RegulationConstraints::default().with_setbacks(Setbacks::uniform(3.0))
}

fn region() -> Bounds {
    Bounds::new(3.0, 3.0, 37.0, 27.0)
}

fn envelope(shape: BuildingShape, regs: &RegulationConstraints) -> Envelope {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    ShapeSynthesizer::new(regs, SITE_AREA)
        .synthesize(shape, region(), false, &mut rng)
        .unwrap()
}

fn program() -> UnitProgram {
    UnitProgram::new().with("2BHK", 60.0).with("1BHK", 40.0)
}

fn assert_plate_valid(plate: &FloorPlateResult, envelope: &Envelope, min_width: f64) {
    let core = &plate.cores[0];
    for unit in &plate.units {
        assert!(unit.width >= min_width - 1e-9, "{} too narrow", unit.id);
        assert!(
            is_covered(&unit.polygon(), envelope.footprint()),
            "{} leaves the envelope",
            unit.id
        );
        let vertical_overlap = unit.y < core.y + core.depth && unit.top() > core.y;
        if vertical_overlap {
            assert!(!core.overlaps_span(unit.x, unit.right()), "{} hits the core", unit.id);
        }
    }
    for (i, a) in plate.units.iter().enumerate() {
        for b in &plate.units[i + 1..] {
            let apart = a.right() <= b.x + 1e-9
                || b.right() <= a.x + 1e-9
                || a.top() <= b.y + 1e-9
                || b.top() <= a.y + 1e-9;
            assert!(apart, "{} overlaps {}", a.id, b.id);
        }
    }
    assert!(plate.efficiency > 0.0 && plate.efficiency <= 1.0);
    assert!(plate.usable_area <= plate.total_area);
}

#[test]
fn test_double_loaded_linear() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::Linear, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let plate = engine
        .layout(&env, CorridorType::DoubleLoaded, &program(), false, &mut rng)
        .unwrap();

    assert_eq!(plate.floor_number, 0);
    assert_eq!(plate.cores.len(), 1);
    assert_eq!(plate.cores[0].id, CORE_ID);
    assert_eq!(plate.corridors.len(), 1);

    let corridor = &plate.corridors[0];
    assert_eq!(corridor.depth, regs.min_corridor_width);
    assert!((corridor.width - env.bounds().width()).abs() < 1e-9);

    let north = plate
        .units
        .iter()
        .filter(|u| u.ventilation_sides.as_slice() == [Facing::North])
        .count();
    let south = plate
        .units
        .iter()
        .filter(|u| u.ventilation_sides.as_slice() == [Facing::South])
        .count();
    assert!(north >= 1 && south >= 1);
    assert_eq!(north + south, plate.units.len());

    for unit in &plate.units {
        if unit.ventilation_sides[0] == Facing::North {
            assert!((unit.y - corridor.top()).abs() < 1e-9);
        } else {
            assert!((unit.top() - corridor.y).abs() < 1e-9);
        }
    }
    assert_plate_valid(&plate, &env, regs.min_unit_width);
}

#[test]
fn test_unit_ids_are_sequential() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::Linear, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let plate = engine
        .layout(&env, CorridorType::DoubleLoaded, &program(), false, &mut rng)
        .unwrap();

    for (i, unit) in plate.units.iter().enumerate() {
        assert_eq!(unit.id, format!("unit-{i}"));
    }
}

#[test]
fn test_single_loaded_linear() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::Linear, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let plate = engine
        .layout(&env, CorridorType::SingleLoaded, &program(), false, &mut rng)
        .unwrap();

    let corridor = &plate.corridors[0];
    assert!((corridor.top() - env.bounds().max_y).abs() < 1e-9);
    assert!(!plate.units.is_empty());
    for unit in &plate.units {
        assert!((unit.y - env.bounds().min_y).abs() < 1e-9);
        assert_eq!(
            unit.ventilation_sides.as_slice(),
            [Facing::South, Facing::East, Facing::West]
        );
    }
    assert_plate_valid(&plate, &env, regs.min_unit_width);
}

#[test]
fn test_units_stay_inside_every_shape() {
    let regs = regulations().with_max_coverage(1.0);
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    for shape in BuildingShape::ALL {
        let env = envelope(shape, &regs);
        for corridor in CorridorType::SWEEP {
            let mut rng = ChaCha8Rng::seed_from_u64(5);
            let plate = engine.layout(&env, corridor, &program(), false, &mut rng).unwrap();
            if !plate.units.is_empty() {
                assert_plate_valid(&plate, &env, regs.min_unit_width);
            }
        }
    }
}

#[test]
fn test_wide_unit_is_clipped_at_core() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::Linear, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let program = UnitProgram::new().with("4BHK", 100.0);

    let plate = engine
        .layout(&env, CorridorType::DoubleLoaded, &program, false, &mut rng)
        .unwrap();

    let core = &plate.cores[0];
    let first = &plate.units[0];
    assert!(first.width < 13.0);
    assert!((first.right() - (core.left() - CORE_CLEARANCE)).abs() < 1e-9);
    assert_plate_valid(&plate, &env, regs.min_unit_width);
}

#[test]
fn test_deterministic_layout_ignores_rng() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::UShape, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();

    let a = engine
        .layout(
            &env,
            CorridorType::DoubleLoaded,
            &program(),
            false,
            &mut ChaCha8Rng::seed_from_u64(1),
        )
        .unwrap();
    let b = engine
        .layout(
            &env,
            CorridorType::DoubleLoaded,
            &program(),
            false,
            &mut ChaCha8Rng::seed_from_u64(2),
        )
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_shallow_envelope_places_nothing() {
    let regs = regulations().with_max_coverage(1.0);
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let env = ShapeSynthesizer::new(&regs, 10_000.0)
        .synthesize(
            BuildingShape::Linear,
            Bounds::new(0.0, 0.0, 200.0, 5.0),
            false,
            &mut rng,
        )
        .unwrap();
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();

    let plate = engine
        .layout(&env, CorridorType::DoubleLoaded, &program(), false, &mut rng)
        .unwrap();
    assert!(plate.units.is_empty());
    assert_eq!(plate.usable_area, 0.0);
    assert_eq!(plate.efficiency, 0.0);
}

#[test]
fn test_missing_core_template() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::new().with("small", CoreTemplate::new("core-small", 4.0, 6.0, 1, 1));
    let result = FloorPlateLayoutEngine::new(&regs, &catalog, &cores);
    assert!(matches!(result, Err(AttemptError::MissingCatalogEntry(_))));
}

#[test]
fn test_boundary_is_closed_ring() {
    let regs = regulations();
    let catalog = UnitCatalog::standard();
    let cores = CoreCatalog::standard();
    let env = envelope(BuildingShape::LShape, &regs);
    let engine = FloorPlateLayoutEngine::new(&regs, &catalog, &cores).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let plate = engine
        .layout(&env, CorridorType::DoubleLoaded, &program(), false, &mut rng)
        .unwrap();
    let ring = &plate.boundary_polygon;
    assert!(ring.len() >= 7);
    assert_eq!(ring.first(), ring.last());
}
