//! FloorReplicator - stacks a typical floor plate into a building.

use std::ops::Range;

use plateforge_core::FloorPlateResult;

/// Copies a typical plate onto every residential floor.
///
/// With stilt parking the ground floor is left to parking and residential
/// floors start at 1.
///
/// # Examples
///
/// ```
/// use plateforge_generator::FloorReplicator;
///
/// assert_eq!(FloorReplicator::new(3, true).floor_numbers(), 1..4);
/// assert_eq!(FloorReplicator::new(3, false).floor_numbers(), 0..3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorReplicator {
    floor_count: u32,
    stilt_parking: bool,
}

impl FloorReplicator {
    pub fn new(floor_count: u32, stilt_parking: bool) -> Self {
        Self {
            floor_count,
            stilt_parking,
        }
    }

    pub fn first_floor(&self) -> u32 {
        u32::from(self.stilt_parking)
    }

    pub fn floor_numbers(&self) -> Range<u32> {
        let first = self.first_floor();
        first..first + self.floor_count
    }

    /// Stories counted for built-up area and height: residential floors
    /// plus the stilt level.
    pub fn story_count(&self) -> u32 {
        self.floor_count + self.first_floor()
    }

    /// Independent copies of `plate`, one per floor, with every unit
    /// re-tagged to its floor.
    pub fn replicate(&self, plate: &FloorPlateResult) -> Vec<FloorPlateResult> {
        self.floor_numbers()
            .map(|floor_number| FloorPlateResult {
                floor_number,
                units: plate.units.iter().map(|u| u.on_floor(floor_number)).collect(),
                ..plate.clone()
            })
            .collect()
    }
}
