use super::alignment::{align_parents, AlignedRepresentation};
use super::compiler::{compile, AssemblyInstructions, CompileContext, ParentPair};
use super::connector_table::ConnectorTable;
use super::crossover::crossover_with;
use super::synthesis::{GapEstimator, SampledPlacements};
use super::units::{define_units, Unit};
use crate::config::RecombinationConfig;
use crate::engines::placement::PlacementProvider;
use crate::error::{MotifError, Result};
use crate::model::{IdAllocator, Organism};
use rand::Rng;

/// Sexual recombination of two organisms placed on a shared reference sequence.
///
/// The parents are aligned on the reference sequence, the alignment is cut into
/// units, units are swapped at random between the two children, and each child is
/// compiled back into an organism. Connectors spanning gaps no parent covers are
/// estimated from both parents' placements on `sample`.
pub struct Recombinator<'a, P: PlacementProvider + ?Sized> {
    placer: &'a P,
    ids: &'a IdAllocator,
    estimator: GapEstimator,
    swap_probability: f64,
}

impl<'a, P: PlacementProvider + ?Sized> Recombinator<'a, P> {
    pub fn new(placer: &'a P, ids: &'a IdAllocator, config: &RecombinationConfig) -> Self {
        Self {
            placer,
            ids,
            estimator: GapEstimator::from_config(config),
            swap_probability: config.swap_probability,
        }
    }

    pub fn recombine<R, S>(
        &self,
        parent1: &Organism,
        parent2: &Organism,
        reference: &str,
        sample: &[S],
        rng: &mut R,
    ) -> Result<(Organism, Organism)>
    where
        R: Rng,
        S: AsRef<str>,
    {
        let probability = self.swap_probability;
        self.recombine_with(parent1, parent2, reference, sample, |_| {
            rng.gen_bool(probability)
        })
    }

    /// [`Self::recombine`] with the per-unit swap decision supplied by the caller
    pub fn recombine_with<S, F>(
        &self,
        parent1: &Organism,
        parent2: &Organism,
        reference: &str,
        sample: &[S],
        swap: F,
    ) -> Result<(Organism, Organism)>
    where
        S: AsRef<str>,
        F: FnMut(Unit) -> bool,
    {
        parent1.ensure_recombinable()?;
        parent2.ensure_recombinable()?;
        if sample.is_empty() {
            return Err(MotifError::EmptySample);
        }

        let sampled = SampledPlacements::collect(self.placer, parent1, parent2, sample)?;
        let parents_repr = align_parents(self.placer, parent1, parent2, reference)?;
        let table = ConnectorTable::build(&parents_repr);
        let units = define_units(&parents_repr);

        let child1_id = self.ids.next_id();
        let child2_id = self.ids.next_id();
        let children_repr = crossover_with(&parents_repr, &units, child1_id, child2_id, swap);

        let ctx = CompileContext {
            parents: ParentPair::new(parent1, parent2),
            parents_repr: &parents_repr,
            sample: &sampled,
            estimator: &self.estimator,
        };

        let child1 = compile(
            child1_id,
            &AssemblyInstructions::from_row(children_repr.organism1(), &table),
            &ctx,
        )?;
        let child2 = compile(
            child2_id,
            &AssemblyInstructions::from_row(children_repr.organism2(), &table),
            &ctx,
        )?;

        log::debug!(
            "Recombined {} x {} -> {} ({} recognizers) + {} ({} recognizers)",
            parent1.id(),
            parent2.id(),
            child1.id(),
            child1.count_recognizers(),
            child2.id(),
            child2.count_recognizers()
        );

        Ok((child1, child2))
    }

    /// Alignment of the two parents on `reference`, without recombining
    pub fn align(&self, parent1: &Organism, parent2: &Organism, reference: &str) -> Result<AlignedRepresentation> {
        align_parents(self.placer, parent1, parent2, reference)
    }
}
