use crate::config::RecombinationConfig;
use crate::engines::placement::{Placement, PlacementProvider};
use crate::error::{MotifError, Result};
use crate::model::{Connector, Organism};
use crate::types::{NodeRef, ParentTag};
use crate::utils::stats::{mean, population_std_dev};

/// Both parents placed on the same sample of sequences, index by index
#[derive(Debug, Clone)]
pub struct SampledPlacements {
    parent1: Vec<Placement>,
    parent2: Vec<Placement>,
}

impl SampledPlacements {
    pub fn new(parent1: Vec<Placement>, parent2: Vec<Placement>) -> Result<Self> {
        if parent1.is_empty() || parent2.is_empty() {
            return Err(MotifError::EmptySample);
        }
        if parent1.len() != parent2.len() {
            return Err(MotifError::InvariantViolation(format!(
                "sampled placements differ in count: {} vs {}",
                parent1.len(),
                parent2.len()
            )));
        }
        Ok(Self { parent1, parent2 })
    }

    /// Place each parent on every sequence of `sample`
    pub fn collect<P, S>(placer: &P, parent1: &Organism, parent2: &Organism, sample: &[S]) -> Result<Self>
    where
        P: PlacementProvider + ?Sized,
        S: AsRef<str>,
    {
        let mut placements1 = Vec::with_capacity(sample.len());
        let mut placements2 = Vec::with_capacity(sample.len());

        for sequence in sample {
            let placement = placer.place(parent1, sequence.as_ref())?;
            placement.check_matches(parent1)?;
            placements1.push(placement);

            let placement = placer.place(parent2, sequence.as_ref())?;
            placement.check_matches(parent2)?;
            placements2.push(placement);
        }

        Self::new(placements1, placements2)
    }

    pub fn len(&self) -> usize {
        self.parent1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent1.is_empty()
    }

    pub fn for_parent(&self, parent: ParentTag) -> &[Placement] {
        match parent {
            ParentTag::P1 => &self.parent1,
            ParentTag::P2 => &self.parent2,
        }
    }
}

/// Estimates a new connector from the gaps observed between two recognizers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapEstimator {
    min_mu: f64,
    min_sigma: f64,
}

impl Default for GapEstimator {
    fn default() -> Self {
        Self::from_config(&RecombinationConfig::default())
    }
}

impl GapEstimator {
    pub fn new(min_mu: f64, min_sigma: f64) -> Self {
        Self { min_mu, min_sigma }
    }

    pub fn from_config(config: &RecombinationConfig) -> Self {
        Self::new(config.min_mu, config.min_sigma)
    }

    /// One gap per sampled sequence between the end of `left` and the start of `right`.
    /// Each recognizer is looked up in its own parent's placement.
    pub fn gaps(&self, left: NodeRef, right: NodeRef, sample: &SampledPlacements) -> Result<Vec<f64>> {
        let left_placements = sample.for_parent(left.parent);
        let right_placements = sample.for_parent(right.parent);

        left_placements
            .iter()
            .zip(right_placements)
            .map(|(lp, rp)| {
                let left_interval = lp.interval(left.index)?;
                let right_interval = rp.interval(right.index)?;
                Ok(left_interval.gap_to(&right_interval) as f64)
            })
            .collect()
    }

    /// Mean and population spread of `gaps`, clamped to the configured floors
    pub fn estimate(&self, gaps: &[f64]) -> Result<Connector> {
        let mu = mean(gaps).ok_or(MotifError::EmptySample)?;
        let sigma = population_std_dev(gaps).ok_or(MotifError::EmptySample)?;

        // TODO: the floors are placeholders pending calibration against real gap data
        Ok(Connector::new(mu.max(self.min_mu), sigma.max(self.min_sigma)))
    }

    pub fn synthesize(&self, left: NodeRef, right: NodeRef, sample: &SampledPlacements) -> Result<Connector> {
        let gaps = self.gaps(left, right, sample)?;
        let connector = self.estimate(&gaps)?;
        log::debug!(
            "Synthesized connector {} -> {}: mu={:.3} sigma={:.3} from {} gaps",
            left,
            right,
            connector.mu,
            connector.sigma,
            gaps.len()
        );
        Ok(connector)
    }
}
