//! Dwelling unit templates and placed instances.

use geo::Polygon;
use serde::{Deserialize, Serialize};

use super::shape::VentilationSides;
use crate::geometry::rect;

/// A dwelling-type catalog entry.
///
/// Dimensions are in meters, areas in square meters.
///
/// # Examples
///
/// ```
/// use plateforge_core::domain::UnitTemplate;
///
/// let t = UnitTemplate::new("2bhk-std", "2 BHK", "2BHK", 8.5, 7.5, 65.0, 85.0);
/// assert_eq!(t.footprint(), 63.75);
/// assert!(t.aspect_ratio_within_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTemplate {
    pub id: String,
    pub name: String,
    /// Catalog key / BHK label, e.g. `"2BHK"`.
    pub bhk_type: String,
    pub width: f64,
    pub depth: f64,
    pub carpet_area: f64,
    #[serde(rename = "superBuiltUp")]
    pub super_built_up: f64,
    #[serde(default = "UnitTemplate::default_min_aspect_ratio")]
    pub min_aspect_ratio: f64,
    #[serde(default = "UnitTemplate::default_max_aspect_ratio")]
    pub max_aspect_ratio: f64,
    #[serde(default = "UnitTemplate::default_requires_ventilation")]
    pub requires_ventilation: bool,
    /// Display hint for front ends.
    #[serde(default = "UnitTemplate::default_color")]
    pub color: String,
}

impl UnitTemplate {
    const fn default_min_aspect_ratio() -> f64 {
        0.4
    }

    const fn default_max_aspect_ratio() -> f64 {
        2.5
    }

    const fn default_requires_ventilation() -> bool {
        true
    }

    fn default_color() -> String {
        "#B3E5FC".to_string()
    }

    /// Creates a template with default aspect bounds and ventilation flag.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        bhk_type: impl Into<String>,
        width: f64,
        depth: f64,
        carpet_area: f64,
        super_built_up: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bhk_type: bhk_type.into(),
            width,
            depth,
            carpet_area,
            super_built_up,
            min_aspect_ratio: Self::default_min_aspect_ratio(),
            max_aspect_ratio: Self::default_max_aspect_ratio(),
            requires_ventilation: Self::default_requires_ventilation(),
            color: Self::default_color(),
        }
    }

    pub fn with_aspect_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_aspect_ratio = min;
        self.max_aspect_ratio = max;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Nominal footprint (width × depth).
    pub fn footprint(&self) -> f64 {
        self.width * self.depth
    }

    /// Width over depth.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.depth
    }

    pub fn aspect_ratio_within_bounds(&self) -> bool {
        let ratio = self.aspect_ratio();
        ratio >= self.min_aspect_ratio && ratio <= self.max_aspect_ratio
    }
}

/// A unit instance on one floor. `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedUnit {
    pub id: String,
    pub unit_type_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    /// Degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub floor: u32,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub ventilation_sides: VentilationSides,
}

impl PlacedUnit {
    pub fn footprint_area(&self) -> f64 {
        self.width * self.depth
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.depth
    }

    pub fn polygon(&self) -> Polygon<f64> {
        rect(self.x, self.y, self.right(), self.top())
    }

    /// Returns a copy of this unit stamped onto another floor.
    pub fn on_floor(&self, floor: u32) -> Self {
        Self {
            floor,
            ..self.clone()
        }
    }
}
