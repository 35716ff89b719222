//! Unit template selection for packing.

use plateforge_config::MixStrategy;
use plateforge_core::{UnitCatalog, UnitProgram, UnitTemplate};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::AttemptError;

/// Copies of a template in the pool per full program, before flooring.
const POOL_RESOLUTION: f64 = 10.0;

/// Unit templates weighted by the requested program.
///
/// Each catalog type with a positive share contributes
/// `max(1, floor(share / total * 10))` copies, in program order. A program
/// that names nothing in the catalog falls back to the catalog's 2BHK.
#[derive(Debug, Clone)]
pub struct TemplatePool<'a> {
    entries: Vec<&'a UnitTemplate>,
    targets: Vec<(&'a UnitTemplate, f64)>,
}

impl<'a> TemplatePool<'a> {
    pub fn build(program: &UnitProgram, catalog: &'a UnitCatalog) -> Result<Self, AttemptError> {
        let total = program.total();
        let mut entries = Vec::new();
        let mut targets = Vec::new();

        if total > 0.0 {
            for (key, share) in program.positive() {
                let Some(template) = catalog.get(key) else {
                    continue;
                };
                let copies = ((share / total * POOL_RESOLUTION).floor() as usize).max(1);
                entries.extend(std::iter::repeat_n(template, copies));
                targets.push((template, share / total));
            }
        }

        if entries.is_empty() {
            let fallback = catalog.fallback().ok_or_else(|| {
                AttemptError::MissingCatalogEntry(UnitCatalog::FALLBACK_KEY.to_string())
            })?;
            entries.push(fallback);
            targets.push((fallback, 1.0));
        }

        Ok(Self { entries, targets })
    }

    pub fn entries(&self) -> &[&'a UnitTemplate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest template in the pool.
    pub fn max_depth(&self) -> f64 {
        self.entries.iter().map(|t| t.depth).fold(0.0, f64::max)
    }

    fn first(&self) -> &'a UnitTemplate {
        self.entries[0]
    }
}

/// Draws templates from a pool while one floor plate is packed.
///
/// Deterministic draws depend only on how many units have been placed so
/// far, so a rejected draw is repeated on the next try.
#[derive(Debug)]
pub struct TemplatePicker<'p, 'a> {
    pool: &'p TemplatePool<'a>,
    strategy: MixStrategy,
    randomize: bool,
    placed: Vec<usize>,
    placed_total: usize,
}

impl<'p, 'a> TemplatePicker<'p, 'a> {
    pub fn new(pool: &'p TemplatePool<'a>, strategy: MixStrategy, randomize: bool) -> Self {
        Self {
            pool,
            strategy,
            randomize,
            placed: vec![0; pool.targets.len()],
            placed_total: 0,
        }
    }

    pub fn next<R: Rng>(&self, rng: &mut R) -> &'a UnitTemplate {
        if self.randomize {
            return self
                .pool
                .entries
                .choose(rng)
                .copied()
                .unwrap_or_else(|| self.pool.first());
        }

        match self.strategy {
            MixStrategy::WeightedPool => self.pool.entries[self.placed_total % self.pool.len()],
            MixStrategy::Proportional => self.largest_deficit(),
        }
    }

    /// Records that `template` was placed.
    pub fn record(&mut self, template: &UnitTemplate) {
        self.placed_total += 1;
        if let Some(i) = self
            .pool
            .targets
            .iter()
            .position(|(t, _)| t.id == template.id)
        {
            self.placed[i] += 1;
        }
    }

    pub fn placed_total(&self) -> usize {
        self.placed_total
    }

    /// Template whose placed count lags its target share the most after one
    /// more placement. Ties go to the earlier program entry.
    fn largest_deficit(&self) -> &'a UnitTemplate {
        let next = (self.placed_total + 1) as f64;
        let mut best = self.pool.first();
        let mut best_deficit = f64::NEG_INFINITY;
        for ((template, share), placed) in self.pool.targets.iter().zip(&self.placed) {
            let deficit = share * next - *placed as f64;
            if deficit > best_deficit {
                best = *template;
                best_deficit = deficit;
            }
        }
        best
    }
}
