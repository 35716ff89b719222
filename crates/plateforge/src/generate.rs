//! One-call entry point.

use plateforge_config::PlateForgeConfig;
use plateforge_core::{PlateForgeError, Result, SitePolygon};
use plateforge_generator::{GenerationReport, GenerationRequest, GeneratorScope, VariantGenerator};
use tracing::debug;

/// Configuration file read by [`load_config`].
pub const CONFIG_FILE: &str = "plateforge.toml";

/// Loads [`CONFIG_FILE`] from the working directory, falling back to
/// defaults when it is missing or invalid.
pub fn load_config() -> PlateForgeConfig {
    PlateForgeConfig::load(CONFIG_FILE).unwrap_or_else(|e| {
        debug!(event = "config_default", file = CONFIG_FILE, reason = %e);
        PlateForgeConfig::default()
    })
}

/// Generates ranked variants for `site`.
///
/// The configuration is validated first; the random source is seeded from
/// `config.generator.random_seed` when set.
///
/// # Errors
///
/// Returns [`PlateForgeError::Config`] for an invalid configuration and
/// [`PlateForgeError::InvalidRequest`] for a request asking for zero floors
/// or zero variants. An infeasible site is not an error.
pub fn generate_floor_plate_variants(
    site: SitePolygon,
    request: &GenerationRequest,
    config: &PlateForgeConfig,
) -> Result<GenerationReport> {
    config
        .validate()
        .map_err(|e| PlateForgeError::Config(e.to_string()))?;

    let generator = VariantGenerator::new(site, config.regulations.clone()).with_config(&config.generator);
    let mut scope = GeneratorScope::from_config(&config.generator);
    generator.generate(request, &mut scope)
}
