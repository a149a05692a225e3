use super::recombinator::Recombinator;
use crate::config::RecombinationConfig;
use crate::engines::placement::PlacementProvider;
use crate::error::{MotifError, Result};
use crate::model::{IdAllocator, Organism};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Result of recombining a whole population
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub offspring: Vec<Organism>,
    pub recombined_pairs: usize,
    pub passed_through: usize,
    pub failed_pairs: usize,
}

enum PairOutcome {
    Recombined(Organism, Organism),
    PassedThrough(Vec<Organism>),
    Failed(Vec<Organism>),
}

/// Recombines consecutive pairs of a population in parallel.
///
/// Each pair draws from its own RNG seeded from the master seed and the pair index,
/// so a run is reproducible regardless of how rayon schedules the pairs.
pub struct BatchRecombinator<'a, P: PlacementProvider + Sync + ?Sized> {
    placer: &'a P,
    ids: &'a IdAllocator,
    config: RecombinationConfig,
}

impl<'a, P: PlacementProvider + Sync + ?Sized> BatchRecombinator<'a, P> {
    pub fn new(placer: &'a P, ids: &'a IdAllocator, config: RecombinationConfig) -> Self {
        Self { placer, ids, config }
    }

    /// Pair `population[0]` with `population[1]`, `[2]` with `[3]` and so on. A trailing
    /// unpaired organism passes through unchanged, as does any pair that is not drawn
    /// for recombination or whose recombination fails.
    pub fn run<S>(&self, population: &[Organism], positive_set: &[S], seed: u64) -> Result<BatchOutcome>
    where
        S: AsRef<str> + Sync,
    {
        if positive_set.is_empty() {
            return Err(MotifError::EmptySample);
        }

        let recombinator = Recombinator::new(self.placer, self.ids, &self.config);

        let outcomes: Vec<PairOutcome> = population
            .par_chunks(2)
            .enumerate()
            .map(|(pair_idx, pair)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(pair_idx as u64));
                self.process_pair(&recombinator, pair, positive_set, &mut rng)
            })
            .collect();

        let mut batch = BatchOutcome::default();
        for outcome in outcomes {
            match outcome {
                PairOutcome::Recombined(child1, child2) => {
                    batch.recombined_pairs += 1;
                    batch.offspring.push(child1);
                    batch.offspring.push(child2);
                }
                PairOutcome::PassedThrough(parents) => {
                    batch.passed_through += 1;
                    batch.offspring.extend(parents);
                }
                PairOutcome::Failed(parents) => {
                    batch.failed_pairs += 1;
                    batch.offspring.extend(parents);
                }
            }
        }

        log::info!(
            "Recombination batch: {} pairs recombined, {} passed through, {} failed",
            batch.recombined_pairs,
            batch.passed_through,
            batch.failed_pairs
        );

        Ok(batch)
    }

    fn process_pair<S: AsRef<str>>(
        &self,
        recombinator: &Recombinator<'_, P>,
        pair: &[Organism],
        positive_set: &[S],
        rng: &mut StdRng,
    ) -> PairOutcome {
        let (parent1, parent2) = match pair {
            [p1, p2] => (p1, p2),
            _ => return PairOutcome::PassedThrough(pair.to_vec()),
        };

        if !rng.gen_bool(self.config.recombination_probability) {
            return PairOutcome::PassedThrough(pair.to_vec());
        }

        let Some(reference) = positive_set.choose(rng) else {
            return PairOutcome::PassedThrough(pair.to_vec());
        };
        let sample_size = self.config.sample_size.min(positive_set.len());
        let sample: Vec<&S> = positive_set.choose_multiple(rng, sample_size).collect();

        match recombinator.recombine(parent1, parent2, reference.as_ref(), &sample, rng) {
            Ok((child1, child2)) => PairOutcome::Recombined(child1, child2),
            Err(e) => {
                log::warn!(
                    "Recombination of {} and {} rejected: {}",
                    parent1.id(),
                    parent2.id(),
                    e
                );
                PairOutcome::Failed(pair.to_vec())
            }
        }
    }
}
