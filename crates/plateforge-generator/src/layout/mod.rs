//! FloorPlateLayoutEngine - places one core, one corridor and units on a
//! single floor plate.
//!
//! Layout is axis-aligned. The corridor runs the full envelope width; the
//! core is centered on the envelope centroid; units are packed greedily in
//! rows along the corridor, skipping the core and any part of the row band
//! that falls outside the envelope.

mod packing;
mod pool;
mod spans;

use plateforge_config::{MixStrategy, RegulationConstraints};
use plateforge_core::geometry::exterior_ring;
use plateforge_core::{
    CoreCatalog, CoreTemplate, Corridor, CorridorType, Facing, FloorPlateResult, PlacedCore,
    UnitCatalog, UnitProgram,
};
use rand::Rng;
use smallvec::smallvec;
use tracing::debug;

use crate::error::AttemptError;
use crate::shape::Envelope;

pub use packing::{RowAnchor, RowSpec, CORE_CLEARANCE, MIN_PROBE_WIDTH, UNIT_GAP};
pub use pool::{TemplatePicker, TemplatePool};
pub use spans::{row_spans, Span};

use packing::RowPacker;

/// Id of the single core placed on every plate.
pub const CORE_ID: &str = "core-1";

/// Rows shallower than this are left empty.
pub const MIN_ROW_DEPTH: f64 = 3.0;

/// Lays out floor plates for one catalog and regulation set.
#[derive(Debug, Clone, Copy)]
pub struct FloorPlateLayoutEngine<'a> {
    regulations: &'a RegulationConstraints,
    catalog: &'a UnitCatalog,
    core_template: &'a CoreTemplate,
    mix_strategy: MixStrategy,
}

impl<'a> FloorPlateLayoutEngine<'a> {
    /// Creates an engine using the catalog's default ("medium") core.
    pub fn new(
        regulations: &'a RegulationConstraints,
        catalog: &'a UnitCatalog,
        cores: &'a CoreCatalog,
    ) -> Result<Self, AttemptError> {
        let core_template = cores.get(CoreCatalog::DEFAULT_KEY).ok_or_else(|| {
            AttemptError::MissingCatalogEntry(format!("core '{}'", CoreCatalog::DEFAULT_KEY))
        })?;
        Ok(Self {
            regulations,
            catalog,
            core_template,
            mix_strategy: MixStrategy::default(),
        })
    }

    pub fn with_mix_strategy(mut self, mix_strategy: MixStrategy) -> Self {
        self.mix_strategy = mix_strategy;
        self
    }

    /// Lays out a single floor plate (floor number 0) inside `envelope`.
    ///
    /// A plate with no units is returned as-is; callers decide whether that
    /// counts as a failed attempt.
    pub fn layout<R: Rng>(
        &self,
        envelope: &Envelope,
        corridor_type: CorridorType,
        program: &UnitProgram,
        randomize: bool,
        rng: &mut R,
    ) -> Result<FloorPlateResult, AttemptError> {
        let bounds = envelope.bounds();
        let (cx, cy) = envelope.centroid();
        let core = PlacedCore::centered(CORE_ID, self.core_template, cx, cy);

        let pool = TemplatePool::build(program, self.catalog)?;
        let mut picker = TemplatePicker::new(&pool, self.mix_strategy, randomize);

        let corridor_width = self.regulations.min_corridor_width;
        let (corridor, rows) = match corridor_type {
            CorridorType::DoubleLoaded => {
                let y = bounds.min_y + bounds.depth() / 2.0 - corridor_width / 2.0;
                let corridor = Corridor {
                    x: bounds.min_x,
                    y,
                    width: bounds.width(),
                    depth: corridor_width,
                    corridor_type,
                };
                let top_depth = bounds.max_y - corridor.top();
                let bottom_depth = corridor.y - bounds.min_y;
                let max_depth = self.regulations.max_unit_depth.min(top_depth).min(bottom_depth);
                let rows = vec![
                    RowSpec {
                        edge: corridor.top(),
                        anchor: RowAnchor::Above,
                        max_depth,
                        ventilation: smallvec![Facing::North],
                    },
                    RowSpec {
                        edge: corridor.y,
                        anchor: RowAnchor::Below,
                        max_depth,
                        ventilation: smallvec![Facing::South],
                    },
                ];
                (corridor, rows)
            }
            CorridorType::SingleLoaded => {
                let corridor = Corridor {
                    x: bounds.min_x,
                    y: bounds.max_y - corridor_width,
                    width: bounds.width(),
                    depth: corridor_width,
                    corridor_type,
                };
                let max_depth = self
                    .regulations
                    .max_unit_depth
                    .min(corridor.y - bounds.min_y);
                let rows = vec![RowSpec {
                    edge: bounds.min_y,
                    anchor: RowAnchor::Above,
                    max_depth,
                    ventilation: smallvec![Facing::South, Facing::East, Facing::West],
                }];
                (corridor, rows)
            }
        };

        let packer = RowPacker {
            footprint: envelope.footprint(),
            left: bounds.min_x,
            right: bounds.max_x,
            core: &core,
            min_unit_width: self.regulations.min_unit_width,
        };

        let mut units = Vec::new();
        for row in &rows {
            if row.max_depth < MIN_ROW_DEPTH {
                debug!(
                    event = "row_skipped",
                    edge = row.edge,
                    max_depth = row.max_depth,
                );
                continue;
            }
            packer.pack(row, pool.max_depth(), &mut picker, rng, &mut units);
        }

        let total_area = envelope.area();
        let usable_area: f64 = units.iter().map(|u| u.footprint_area()).sum();
        let efficiency = if total_area > 0.0 {
            (usable_area / total_area).min(1.0)
        } else {
            0.0
        };

        Ok(FloorPlateResult {
            floor_number: 0,
            units,
            cores: vec![core],
            corridors: vec![corridor],
            boundary_polygon: exterior_ring(envelope.footprint()),
            total_area,
            usable_area,
            efficiency,
        })
    }
}

#[cfg(test)]
mod tests;
