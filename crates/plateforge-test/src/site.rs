//! Site boundary fixtures.

use plateforge_core::SitePolygon;

/// Axis-aligned `width` x `depth` site anchored at the origin.
///
/// # Panics
///
/// Panics on non-positive dimensions.
pub fn rectangular_site(width: f64, depth: f64) -> SitePolygon {
    SitePolygon::rectangle(width, depth).expect("valid rectangle")
}

/// Square site with the given area.
pub fn square_site(area: f64) -> SitePolygon {
    let side = area.sqrt();
    rectangular_site(side, side)
}

/// L-shaped site: a 60 x 25 base with a 25 x 35 arm rising on the left.
pub fn l_shaped_site() -> SitePolygon {
    SitePolygon::from_ring([
        (0.0, 0.0),
        (60.0, 0.0),
        (60.0, 25.0),
        (25.0, 25.0),
        (25.0, 60.0),
        (0.0, 60.0),
    ])
    .expect("valid L-shaped site")
}

/// Two 30 x 30 lobes joined by a 10 m long, 4 m wide neck. Any setback of
/// 2 m or more splits it.
pub fn dumbbell_site() -> SitePolygon {
    SitePolygon::from_ring([
        (0.0, 0.0),
        (30.0, 0.0),
        (30.0, 13.0),
        (40.0, 13.0),
        (40.0, 0.0),
        (70.0, 0.0),
        (70.0, 30.0),
        (40.0, 30.0),
        (40.0, 17.0),
        (30.0, 17.0),
        (30.0, 30.0),
        (0.0, 30.0),
    ])
    .expect("valid dumbbell site")
}
