//! VariantGenerator - sweeps shape/corridor pairs, falls back to randomized
//! draws, then ranks and labels the variants.

use plateforge_config::{GeneratorConfig, MixStrategy, RegulationConstraints};
use plateforge_core::{
    BuildingShape, BuildingVariant, CoreCatalog, CorridorType, PlateForgeError, SitePolygon,
    UnitCatalog, UnitMix,
};
use plateforge_scoring::{ScoreInputs, VariantScorer};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::AttemptError;
use crate::layout::FloorPlateLayoutEngine;
use crate::replicate::FloorReplicator;
use crate::request::{GenerationReport, GenerationRequest, GenerationStatus};
use crate::scope::GeneratorScope;
use crate::setback::{BuildableRegion, NoBuildableRegion, SetbackEngine};
use crate::shape::ShapeSynthesizer;

/// Default bound on randomized fallback attempts.
pub const DEFAULT_MAX_FALLBACK_ATTEMPTS: usize = 50;

/// States of one generation run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Init,
    TemplateSweep,
    RandomFallback,
    Ranked,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Init => "Init",
            GenerationPhase::TemplateSweep => "Template Sweep",
            GenerationPhase::RandomFallback => "Random Fallback",
            GenerationPhase::Ranked => "Ranked",
        }
    }
}

/// Generates ranked building variants for one site.
///
/// The buildable region is derived once, at construction. Each call to
/// [`generate`](Self::generate) draws only from the scope it is given, so a
/// generator can serve independent runs.
///
/// # Examples
///
/// ```
/// use plateforge_config::{RegulationConstraints, Setbacks};
/// use plateforge_core::{SitePolygon, UnitProgram};
/// use plateforge_generator::{GenerationRequest, GeneratorScope, VariantGenerator};
///
/// let site = SitePolygon::rectangle(40.0, 30.0).unwrap();
/// let regulations = RegulationConstraints::default().with_setbacks(Setbacks::uniform(3.0));
/// let generator = VariantGenerator::new(site, regulations);
///
/// let request = GenerationRequest::new(UnitProgram::new().with("2BHK", 100.0)).with_variants(3);
/// let report = generator.generate(&request, &mut GeneratorScope::with_seed(7)).unwrap();
///
/// assert!(report.is_generated());
/// assert!(report.variants.len() <= 3);
/// assert!(report.variants[0].name.starts_with("Option A: "));
/// ```
#[derive(Debug, Clone)]
pub struct VariantGenerator {
    site: SitePolygon,
    site_area: f64,
    regulations: RegulationConstraints,
    catalog: UnitCatalog,
    cores: CoreCatalog,
    scorer: VariantScorer,
    mix_strategy: MixStrategy,
    max_fallback_attempts: usize,
    buildable: Result<BuildableRegion, NoBuildableRegion>,
}

impl VariantGenerator {
    /// Creates a generator with the standard unit and core catalogs.
    pub fn new(site: SitePolygon, regulations: RegulationConstraints) -> Self {
        let site_area = site.area();
        let buildable = SetbackEngine::new(&regulations.setbacks).erode(&site);
        Self {
            site,
            site_area,
            scorer: VariantScorer::from_regulations(&regulations),
            regulations,
            catalog: UnitCatalog::standard(),
            cores: CoreCatalog::standard(),
            mix_strategy: MixStrategy::default(),
            max_fallback_attempts: DEFAULT_MAX_FALLBACK_ATTEMPTS,
            buildable,
        }
    }

    pub fn with_catalog(mut self, catalog: UnitCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_core_catalog(mut self, cores: CoreCatalog) -> Self {
        self.cores = cores;
        self
    }

    /// Applies the mix strategy and fallback bound from `config`.
    pub fn with_config(mut self, config: &GeneratorConfig) -> Self {
        self.mix_strategy = config.mix_strategy;
        self.max_fallback_attempts = config.max_fallback_attempts;
        self
    }

    pub fn site(&self) -> &SitePolygon {
        &self.site
    }

    pub fn site_area(&self) -> f64 {
        self.site_area
    }

    pub fn regulations(&self) -> &RegulationConstraints {
        &self.regulations
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn core_catalog(&self) -> &CoreCatalog {
        &self.cores
    }

    pub fn buildable_region(&self) -> Option<&BuildableRegion> {
        self.buildable.as_ref().ok()
    }

    /// Why the site has no buildable region, if it has none.
    pub fn infeasibility(&self) -> Option<&NoBuildableRegion> {
        self.buildable.as_ref().err()
    }

    pub fn buildable_area(&self) -> f64 {
        self.buildable_region().map_or(0.0, BuildableRegion::area)
    }

    /// Runs the full sweep / fallback / rank cycle.
    ///
    /// # Errors
    ///
    /// Only an invalid request is an error. An infeasible site yields a
    /// report with [`GenerationStatus::NoBuildableArea`] and no variants.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        scope: &mut GeneratorScope,
    ) -> Result<GenerationReport, PlateForgeError> {
        request.validate()?;
        scope.start();

        info!(
            event = "generate_start",
            site_area = self.site_area,
            buildable_area = self.buildable_area(),
            num_floors = request.num_floors,
            num_variants = request.num_variants,
            stilt_parking = request.stilt_parking,
        );

        let mut variants = Vec::with_capacity(request.num_variants);
        let mut phase = GenerationPhase::Init;
        loop {
            phase = match phase {
                GenerationPhase::Init => {
                    if let Err(reason) = &self.buildable {
                        info!(event = "no_buildable_area", reason = %reason);
                        return Ok(GenerationReport {
                            status: GenerationStatus::NoBuildableArea,
                            site_area: self.site_area,
                            buildable_area: 0.0,
                            variants,
                            statistics: scope.finish(),
                            message: format!(
                                "Could not generate variants: {reason}. The site may be too small after setbacks."
                            ),
                        });
                    }
                    self.check_height(request);
                    GenerationPhase::TemplateSweep
                }
                GenerationPhase::TemplateSweep => {
                    self.sweep(request, scope, &mut variants);
                    GenerationPhase::RandomFallback
                }
                GenerationPhase::RandomFallback => {
                    self.fallback(request, scope, &mut variants);
                    GenerationPhase::Ranked
                }
                GenerationPhase::Ranked => break,
            };
        }

        rank(&mut variants);
        let statistics = scope.finish();

        info!(
            event = "generate_end",
            variants = variants.len(),
            attempts = statistics.total_attempts(),
            duration_ms = statistics.elapsed_ms,
            best_score = variants.first().map_or(0.0, |v| v.score),
        );

        let (status, message) = if variants.is_empty() {
            (
                GenerationStatus::NoFeasibleVariant,
                "No layout fit the buildable region; try another unit program or relaxed limits."
                    .to_string(),
            )
        } else {
            (
                GenerationStatus::Generated,
                format!("Generated {} design variants", variants.len()),
            )
        };

        Ok(GenerationReport {
            status,
            site_area: self.site_area,
            buildable_area: self.buildable_area(),
            variants,
            statistics,
            message,
        })
    }

    /// Generates one variant for an explicit shape and corridor type.
    ///
    /// Any [`BuildingShape`] is accepted here, including those outside the
    /// sweep. The variant is named `"<Shape> variant"` until ranked.
    pub fn generate_variant<R: Rng>(
        &self,
        id: &str,
        shape: BuildingShape,
        corridor_type: CorridorType,
        request: &GenerationRequest,
        randomize: bool,
        rng: &mut R,
    ) -> Result<BuildingVariant, AttemptError> {
        let region = self
            .buildable
            .as_ref()
            .map_err(|_| AttemptError::NoBuildableRegion)?;

        let envelope = ShapeSynthesizer::new(&self.regulations, self.site_area).synthesize(
            shape,
            region.bounds(),
            randomize,
            rng,
        )?;
        let engine = FloorPlateLayoutEngine::new(&self.regulations, &self.catalog, &self.cores)?
            .with_mix_strategy(self.mix_strategy);
        let plate = engine.layout(&envelope, corridor_type, &request.unit_program, randomize, rng)?;
        if plate.units.is_empty() {
            return Err(AttemptError::NoUnitsPlaced);
        }

        let replicator = FloorReplicator::new(request.num_floors, request.stilt_parking);
        let floors = replicator.replicate(&plate);

        let per_floor = u32::try_from(plate.units.len()).unwrap_or(u32::MAX);
        let total_units = per_floor.saturating_mul(request.num_floors);

        let mut unit_mix = UnitMix::new();
        let mut carpet_per_floor = 0.0;
        for unit in &plate.units {
            let label = self
                .catalog
                .key_for_id(&unit.unit_type_id)
                .unwrap_or(unit.unit_type_id.as_str());
            *unit_mix.entry(label.to_string()).or_insert(0) += request.num_floors;
            carpet_per_floor += self
                .catalog
                .template_for_id(&unit.unit_type_id)
                .map_or(0.0, |t| t.carpet_area);
        }

        let total_built_up_area = plate.total_area * f64::from(replicator.story_count());
        let total_carpet_area = carpet_per_floor * f64::from(request.num_floors);
        let fsi_achieved = total_built_up_area / self.site_area;
        let ground_coverage = envelope.area() / self.site_area;

        let score_breakdown = self.scorer.score(&ScoreInputs {
            total_units,
            fsi_achieved,
            ground_coverage,
            efficiency: plate.efficiency,
            unit_mix: &unit_mix,
            target_mix: &request.unit_program,
        });

        debug!(
            event = "variant_built",
            id,
            shape = shape.as_str(),
            corridor = corridor_type.as_str(),
            units_per_floor = per_floor,
            efficiency = plate.efficiency,
            score = score_breakdown.total,
        );

        Ok(BuildingVariant {
            id: id.to_string(),
            name: format!("{} variant", shape.title()),
            shape,
            corridor_type,
            floors,
            total_units,
            unit_mix,
            total_built_up_area,
            total_carpet_area,
            fsi_achieved,
            ground_coverage,
            height_exceeded: self.exceeds_height(&replicator),
            score: score_breakdown.total,
            score_breakdown,
        })
    }

    fn sweep(
        &self,
        request: &GenerationRequest,
        scope: &mut GeneratorScope,
        variants: &mut Vec<BuildingVariant>,
    ) {
        let phase = GenerationPhase::TemplateSweep;
        info!(event = "phase_start", phase = phase.as_str());

        'pairs: for shape in BuildingShape::SWEEP {
            for corridor_type in CorridorType::SWEEP {
                if variants.len() >= request.num_variants {
                    break 'pairs;
                }
                if scope.should_terminate() {
                    scope.statistics_mut().terminated_early = true;
                    break 'pairs;
                }

                scope.increment_attempt_count();
                scope.statistics_mut().record_attempt(false);
                let id = format!("variant-{}", variants.len() + 1);

                match self.generate_variant(&id, shape, corridor_type, request, false, scope.rng()) {
                    Ok(variant) => {
                        scope.statistics_mut().record_accepted();
                        variants.push(variant);
                    }
                    Err(reason) => {
                        scope.statistics_mut().record_skipped();
                        warn!(
                            event = "attempt_skipped",
                            phase = phase.as_str(),
                            shape = shape.as_str(),
                            corridor = corridor_type.as_str(),
                            reason = %reason,
                        );
                    }
                }
            }
        }

        info!(event = "phase_end", phase = phase.as_str(), variants = variants.len());
    }

    fn fallback(
        &self,
        request: &GenerationRequest,
        scope: &mut GeneratorScope,
        variants: &mut Vec<BuildingVariant>,
    ) {
        let phase = GenerationPhase::RandomFallback;
        if variants.len() >= request.num_variants {
            return;
        }
        info!(event = "phase_start", phase = phase.as_str());

        let mut attempts = 0;
        while variants.len() < request.num_variants {
            if attempts >= self.max_fallback_attempts {
                debug!(event = "fallback_exhausted", attempts);
                break;
            }
            if scope.should_terminate() {
                scope.statistics_mut().terminated_early = true;
                break;
            }

            attempts += 1;
            scope.increment_attempt_count();
            scope.statistics_mut().record_attempt(true);

            let rng = scope.rng();
            let shape = *BuildingShape::SWEEP.choose(rng).unwrap_or(&BuildingShape::Linear);
            let corridor_type = *CorridorType::SWEEP
                .choose(rng)
                .unwrap_or(&CorridorType::DoubleLoaded);
            let id = format!("variant-{}", variants.len() + 1);

            match self.generate_variant(&id, shape, corridor_type, request, true, rng) {
                Ok(variant) => {
                    scope.statistics_mut().record_accepted();
                    variants.push(variant);
                }
                Err(reason) if reason.is_recoverable() => {
                    scope.statistics_mut().record_skipped();
                    debug!(
                        event = "attempt_skipped",
                        phase = phase.as_str(),
                        shape = shape.as_str(),
                        corridor = corridor_type.as_str(),
                        reason = %reason,
                    );
                }
                Err(reason) => {
                    let statistics = scope.statistics_mut();
                    statistics.record_skipped();
                    statistics.fallback_aborted = true;
                    warn!(
                        event = "fallback_aborted",
                        reason = %reason,
                        collected = variants.len(),
                    );
                    break;
                }
            }
        }

        info!(event = "phase_end", phase = phase.as_str(), variants = variants.len());
    }

    fn exceeds_height(&self, replicator: &FloorReplicator) -> bool {
        let height = f64::from(replicator.story_count()) * self.regulations.floor_height;
        height > self.regulations.max_height + 1e-9
    }

    fn check_height(&self, request: &GenerationRequest) {
        let replicator = FloorReplicator::new(request.num_floors, request.stilt_parking);
        if self.exceeds_height(&replicator) {
            warn!(
                event = "height_limit_exceeded",
                stories = replicator.story_count(),
                height = f64::from(replicator.story_count()) * self.regulations.floor_height,
                max_height = self.regulations.max_height,
            );
        }
    }
}

/// Sorts by score, best first, and assigns display names. Ties keep
/// generation order.
fn rank(variants: &mut [BuildingVariant]) {
    variants.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (index, variant) in variants.iter_mut().enumerate() {
        variant.name = format!("Option {}: {}", option_label(index), variant.shape.title());
    }
}

/// Display letter for the variant at `index`: A..Z, then AA, AB, ...
pub fn option_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
