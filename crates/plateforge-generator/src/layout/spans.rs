//! Horizontal runs of a row band that lie inside the envelope.

use geo::{CoordsIter, MultiPolygon};
use plateforge_core::geometry::{is_covered, rect};

const COORD_EPSILON: f64 = 1e-9;

/// A covered run `[start, end]` along x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Splits the band `[left, right] x [y0, y1]` at every envelope vertex and
/// keeps the maximal runs whose slabs lie inside `footprint`.
///
/// A rectangular envelope yields a single span over the full band.
pub fn row_spans(footprint: &MultiPolygon<f64>, left: f64, right: f64, y0: f64, y1: f64) -> Vec<Span> {
    if right - left <= COORD_EPSILON || y1 - y0 <= COORD_EPSILON {
        return Vec::new();
    }

    let mut cuts: Vec<f64> = footprint
        .coords_iter()
        .map(|c| c.x)
        .filter(|&x| x > left + COORD_EPSILON && x < right - COORD_EPSILON)
        .collect();
    cuts.push(left);
    cuts.push(right);
    cuts.sort_by(f64::total_cmp);
    cuts.dedup_by(|a, b| (*a - *b).abs() < COORD_EPSILON);

    let mut spans: Vec<Span> = Vec::new();
    for pair in cuts.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if !is_covered(&rect(a, y0, b, y1), footprint) {
            continue;
        }
        match spans.last_mut() {
            Some(last) if (last.end - a).abs() < COORD_EPSILON => last.end = b,
            _ => spans.push(Span { start: a, end: b }),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::BooleanOps;

    fn shape(parts: &[geo::Polygon<f64>]) -> MultiPolygon<f64> {
        parts.iter().fold(MultiPolygon::new(vec![]), |acc, p| {
            acc.union(&MultiPolygon::new(vec![p.clone()]))
        })
    }

    #[test]
    fn test_rectangle_is_one_span() {
        let footprint = shape(&[rect(0.0, 0.0, 30.0, 20.0)]);
        let spans = row_spans(&footprint, 0.0, 30.0, 0.0, 8.0);
        assert_eq!(spans, vec![Span { start: 0.0, end: 30.0 }]);
        assert_eq!(spans[0].width(), 30.0);
    }

    #[test]
    fn test_u_shape_base_row_is_split() {
        // Wings 0-8 and 22-30 at full depth, base 0-30 up to y=5.
        let footprint = shape(&[
            rect(0.0, 0.0, 8.0, 20.0),
            rect(22.0, 0.0, 30.0, 20.0),
            rect(0.0, 0.0, 30.0, 5.0),
        ]);
        let low = row_spans(&footprint, 0.0, 30.0, 0.0, 5.0);
        assert_eq!(low, vec![Span { start: 0.0, end: 30.0 }]);

        let high = row_spans(&footprint, 0.0, 30.0, 10.0, 18.0);
        assert_eq!(
            high,
            vec![Span { start: 0.0, end: 8.0 }, Span { start: 22.0, end: 30.0 }]
        );
    }

    #[test]
    fn test_band_outside_envelope_is_empty() {
        let footprint = shape(&[rect(0.0, 0.0, 10.0, 10.0)]);
        assert!(row_spans(&footprint, 0.0, 10.0, 12.0, 15.0).is_empty());
        assert!(row_spans(&footprint, 0.0, 10.0, 5.0, 5.0).is_empty());
    }
}
