//! Vertical circulation cores and corridors.

use geo::Polygon;
use serde::{Deserialize, Serialize};

use super::shape::CorridorType;
use crate::geometry::rect;

/// Vertical circulation core (lifts + stairs) catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreTemplate {
    pub id: String,
    pub width: f64,
    pub depth: f64,
    pub lift_count: u32,
    pub stair_count: u32,
    #[serde(default = "CoreTemplate::default_fire_rated")]
    pub fire_rated: bool,
}

impl CoreTemplate {
    const fn default_fire_rated() -> bool {
        true
    }

    pub fn new(id: impl Into<String>, width: f64, depth: f64, lift_count: u32, stair_count: u32) -> Self {
        Self {
            id: id.into(),
            width,
            depth,
            lift_count,
            stair_count,
            fire_rated: Self::default_fire_rated(),
        }
    }

    pub fn footprint(&self) -> f64 {
        self.width * self.depth
    }
}

/// A core placed on a floor plate. `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCore {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    pub lift_count: u32,
    pub stair_count: u32,
}

impl PlacedCore {
    /// Places `template` centered on `(cx, cy)`.
    pub fn centered(id: impl Into<String>, template: &CoreTemplate, cx: f64, cy: f64) -> Self {
        Self {
            id: id.into(),
            x: cx - template.width / 2.0,
            y: cy - template.depth / 2.0,
            width: template.width,
            depth: template.depth,
            lift_count: template.lift_count,
            stair_count: template.stair_count,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// True when the open interval `(x0, x1)` meets the core's horizontal span.
    pub fn overlaps_span(&self, x0: f64, x1: f64) -> bool {
        x0 < self.right() && x1 > self.left()
    }

    pub fn footprint_area(&self) -> f64 {
        self.width * self.depth
    }

    pub fn polygon(&self) -> Polygon<f64> {
        rect(self.x, self.y, self.x + self.width, self.y + self.depth)
    }
}

/// Corridor band on a floor plate. `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    #[serde(rename = "type")]
    pub corridor_type: CorridorType,
}

impl Corridor {
    pub fn top(&self) -> f64 {
        self.y + self.depth
    }

    pub fn footprint_area(&self) -> f64 {
        self.width * self.depth
    }

    pub fn polygon(&self) -> Polygon<f64> {
        rect(self.x, self.y, self.x + self.width, self.top())
    }
}
