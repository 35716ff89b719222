//! Configuration system for PlateForge.
//!
//! Load zoning regulations and generator settings from TOML or YAML files so
//! sites can be re-run under different codes without code changes. Every
//! field is optional and falls back to a documented default.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use plateforge_config::PlateForgeConfig;
//! use std::time::Duration;
//!
//! let config = PlateForgeConfig::from_toml_str(r#"
//!     [regulations]
//!     max_fsi = 3.0
//!     max_coverage = 0.4
//!
//!     [regulations.setbacks]
//!     front = 4.5
//!     rear = 3.0
//!
//!     [generator]
//!     random_seed = 7
//!
//!     [generator.termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.regulations.max_fsi, 3.0);
//! assert_eq!(config.regulations.setbacks.mean(), 3.75);
//! assert_eq!(config.generator.random_seed, Some(7));
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use plateforge_config::PlateForgeConfig;
//!
//! let config = PlateForgeConfig::load("plateforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration: zoning limits plus generator behaviour.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlateForgeConfig {
    /// Zoning and building-code limits.
    #[serde(default)]
    pub regulations: RegulationConstraints,

    /// Variant generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl PlateForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the regulation block.
    pub fn with_regulations(mut self, regulations: RegulationConstraints) -> Self {
        self.regulations = regulations;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.generator.random_seed = Some(seed);
        self
    }

    /// Sets the wall-clock limit for one generation run.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.generator.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.generator.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the unit-mix targeting strategy.
    pub fn with_mix_strategy(mut self, strategy: MixStrategy) -> Self {
        self.generator.mix_strategy = strategy;
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.generator
            .termination
            .as_ref()
            .and_then(|t| t.time_limit())
    }

    /// Checks every numeric limit for sanity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.regulations.validate()?;
        self.generator.validate()
    }
}

/// Named setback distances in meters (`front`, `rear`, `side1`, `side2`, ...).
///
/// Only the mean is used: the site is eroded uniformly by it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Setbacks(IndexMap<String, f64>);

impl Setbacks {
    /// The same distance on the four standard edges.
    pub fn uniform(distance: f64) -> Self {
        Self(
            ["front", "rear", "side1", "side2"]
                .into_iter()
                .map(|edge| (edge.to_string(), distance))
                .collect(),
        )
    }

    /// Adds or replaces one edge's distance.
    pub fn with(mut self, edge: impl Into<String>, distance: f64) -> Self {
        self.0.insert(edge.into(), distance);
        self
    }

    pub fn get(&self, edge: &str) -> Option<f64> {
        self.0.get(edge).copied()
    }

    /// Mean setback distance; zero when no edge is configured.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.0.values().sum::<f64>() / self.0.len() as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Setbacks {
    fn default() -> Self {
        Self::uniform(3.0).with("front", 6.0)
    }
}

/// Zoning and building-code limits used as heuristic bounds.
///
/// Fields not listed in a config file keep their defaults (NBC India /
/// TNCDBR values).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RegulationConstraints {
    /// Maximum floor space index.
    pub max_fsi: f64,
    /// Maximum ground coverage as a fraction of site area.
    pub max_coverage: f64,
    /// Maximum building height in meters.
    pub max_height: f64,
    /// Floor-to-floor height in meters.
    pub floor_height: f64,
    /// Corridor width in meters.
    pub min_corridor_width: f64,
    /// Maximum travel distance to a fire exit in meters. Stored, not checked.
    pub max_travel_distance: f64,
    pub min_staircase_count: u32,
    /// One lift per this many units.
    pub lift_per_units: u32,
    /// Maximum unit depth for through ventilation, in meters.
    pub max_unit_depth: f64,
    /// Minimum governing unit width in meters.
    pub min_unit_width: f64,
    pub setbacks: Setbacks,
}

impl Default for RegulationConstraints {
    fn default() -> Self {
        Self {
            max_fsi: 2.5,
            max_coverage: 0.5,
            max_height: 45.0,
            floor_height: 3.0,
            min_corridor_width: 1.8,
            max_travel_distance: 22.5,
            min_staircase_count: 2,
            lift_per_units: 50,
            max_unit_depth: 15.0,
            min_unit_width: 3.0,
            setbacks: Setbacks::default(),
        }
    }
}

impl RegulationConstraints {
    pub fn with_setbacks(mut self, setbacks: Setbacks) -> Self {
        self.setbacks = setbacks;
        self
    }

    pub fn with_max_fsi(mut self, max_fsi: f64) -> Self {
        self.max_fsi = max_fsi;
        self
    }

    pub fn with_max_coverage(mut self, max_coverage: f64) -> Self {
        self.max_coverage = max_coverage;
        self
    }

    /// Deepest envelope that keeps every unit within ventilation depth:
    /// two unit rows plus the corridor.
    pub fn max_envelope_depth(&self) -> f64 {
        self.max_unit_depth * 2.0 + self.min_corridor_width
    }

    /// Stories (including a stilt level) that fit under the height limit.
    pub fn max_stories(&self) -> u32 {
        if self.floor_height <= 0.0 {
            return 0;
        }
        (self.max_height / self.floor_height).floor() as u32
    }

    /// Lifts required for `units` units under `lift_per_units`.
    pub fn required_lifts(&self, units: u32) -> u32 {
        if self.lift_per_units == 0 {
            return 0;
        }
        units.div_ceil(self.lift_per_units)
    }

    /// Rejects non-finite or out-of-range limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_fsi", self.max_fsi),
            ("max_height", self.max_height),
            ("floor_height", self.floor_height),
            ("min_corridor_width", self.min_corridor_width),
            ("max_travel_distance", self.max_travel_distance),
            ("max_unit_depth", self.max_unit_depth),
            ("min_unit_width", self.min_unit_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.max_coverage > 0.0 && self.max_coverage <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "max_coverage must be in (0, 1], got {}",
                self.max_coverage
            )));
        }
        if let Some((edge, distance)) = self
            .setbacks
            .iter()
            .find(|(_, d)| !d.is_finite() || *d < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "setback '{}' must be non-negative, got {}",
                edge, distance
            )));
        }
        Ok(())
    }
}

/// How the layout engine approaches the requested unit mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixStrategy {
    /// Cycle through a pool of 1-10 repetitions per type, proportional to
    /// its share.
    #[default]
    WeightedPool,

    /// Always place the type furthest below its target share.
    Proportional,
}

/// Variant generator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Random seed for reproducible results. `None` draws from OS entropy.
    pub random_seed: Option<u64>,

    /// Upper bound on randomized fallback attempts per run.
    pub max_fallback_attempts: usize,

    /// Unit-mix targeting strategy.
    pub mix_strategy: MixStrategy,

    /// Optional run limits.
    pub termination: Option<TerminationConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_fallback_attempts: 50,
            mix_strategy: MixStrategy::default(),
            termination: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.attempt_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "attempt_count_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Termination configuration. Limits are checked between attempts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend generating.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend generating.
    pub millis_spent_limit: Option<u64>,

    /// Maximum shape/corridor attempts across both phases.
    pub attempt_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
