//! Greedy left-to-right packing of one row of units.

use geo::MultiPolygon;
use plateforge_core::{PlacedCore, PlacedUnit, VentilationSides};
use rand::Rng;
use tracing::trace;

use super::pool::TemplatePicker;
use super::spans::{row_spans, Span};

/// Horizontal gap left between consecutive units.
pub const UNIT_GAP: f64 = 0.3;

/// Clearance kept between a unit and the core.
pub const CORE_CLEARANCE: f64 = 0.5;

/// Width probed ahead of the cursor before a unit is attempted.
pub const MIN_PROBE_WIDTH: f64 = 3.0;

/// Which side of its edge a row grows towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAnchor {
    /// Units sit on the edge and extend upwards.
    Above,
    /// Units hang below the edge.
    Below,
}

/// One row of units along a corridor.
#[derive(Debug, Clone)]
pub struct RowSpec {
    pub edge: f64,
    pub anchor: RowAnchor,
    /// Deepest a unit in this row may be.
    pub max_depth: f64,
    pub ventilation: VentilationSides,
}

impl RowSpec {
    /// Band `[y0, y1]` a unit of `depth` occupies in this row.
    fn band(&self, depth: f64) -> (f64, f64) {
        match self.anchor {
            RowAnchor::Above => (self.edge, self.edge + depth),
            RowAnchor::Below => (self.edge - depth, self.edge),
        }
    }
}

/// Packs rows of one floor plate around a single core.
#[derive(Debug)]
pub struct RowPacker<'a> {
    pub footprint: &'a MultiPolygon<f64>,
    pub left: f64,
    pub right: f64,
    pub core: &'a PlacedCore,
    pub min_unit_width: f64,
}

impl RowPacker<'_> {
    /// Places units along `row`, appending them to `units`.
    ///
    /// `band_depth` is the depth checked against the envelope; units are never
    /// deeper than it.
    pub fn pack<R: Rng>(
        &self,
        row: &RowSpec,
        band_depth: f64,
        picker: &mut TemplatePicker<'_, '_>,
        rng: &mut R,
        units: &mut Vec<PlacedUnit>,
    ) {
        let depth_limit = row.max_depth.min(band_depth);
        let (y0, y1) = row.band(depth_limit);
        let spans = row_spans(self.footprint, self.left, self.right, y0, y1);
        trace!(
            event = "row_spans",
            edge = row.edge,
            depth = depth_limit,
            spans = spans.len(),
        );

        let mut cursor = self.left;
        for span in spans {
            cursor = cursor.max(span.start);
            cursor = self.pack_span(span, cursor, row, depth_limit, picker, rng, units);
        }
    }

    /// Packs one covered run starting at `cursor`; returns the cursor after
    /// the last placement.
    #[allow(clippy::too_many_arguments)]
    fn pack_span<R: Rng>(
        &self,
        span: Span,
        mut cursor: f64,
        row: &RowSpec,
        depth_limit: f64,
        picker: &mut TemplatePicker<'_, '_>,
        rng: &mut R,
        units: &mut Vec<PlacedUnit>,
    ) -> f64 {
        let core = self.core;
        while cursor < span.end - MIN_PROBE_WIDTH {
            if core.overlaps_span(cursor, cursor + MIN_PROBE_WIDTH) {
                cursor = core.right() + CORE_CLEARANCE;
                continue;
            }

            let template = picker.next(rng);
            let mut width = template.width.min(span.end - cursor);
            if width < self.min_unit_width {
                break;
            }

            // A unit that would run into the core is shortened to stop at the
            // clearance line, or dropped when that leaves too little width.
            if core.overlaps_span(cursor, cursor + width) {
                let room = core.left() - CORE_CLEARANCE - cursor;
                if room >= self.min_unit_width {
                    width = room;
                } else {
                    cursor = core.right() + CORE_CLEARANCE;
                    continue;
                }
            }

            let depth = template.depth.min(depth_limit);
            let y = match row.anchor {
                RowAnchor::Above => row.edge,
                RowAnchor::Below => row.edge - depth,
            };

            units.push(PlacedUnit {
                id: format!("unit-{}", units.len()),
                unit_type_id: template.id.clone(),
                x: cursor,
                y,
                width,
                depth,
                rotation: 0.0,
                floor: 0,
                has_balcony: false,
                ventilation_sides: row.ventilation.clone(),
            });
            picker.record(template);
            cursor += width + UNIT_GAP;
        }
        cursor
    }
}
