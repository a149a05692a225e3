use crate::config::{OrganismConfig, PssmConfig};
use crate::error::Result;
use crate::model::{BaseProbabilities, Connector, IdAllocator, Organism, Pssm};
use crate::utils::stats::sample_poisson;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Creates random organisms and their parts
pub struct OrganismFactory<'a> {
    config: OrganismConfig,
    pseudocount: f64,
    ids: &'a IdAllocator,
}

impl<'a> OrganismFactory<'a> {
    pub fn new(config: OrganismConfig, pssm: &PssmConfig, ids: &'a IdAllocator) -> Self {
        Self {
            config,
            pseudocount: pssm.pseudocount,
            ids,
        }
    }

    pub fn ids(&self) -> &'a IdAllocator {
        self.ids
    }

    /// Random organism whose recognizer count is Poisson-distributed around
    /// `num_recognizers_lambda`. Drawing from `lambda - 1` and adding one keeps the
    /// chain non-empty; single-recognizer chains are bumped to two so every organism
    /// has a connector to recombine.
    pub fn random_organism<R: Rng>(&self, rng: &mut R) -> Result<Organism> {
        let mut num_recognizers = sample_poisson(self.config.num_recognizers_lambda - 1.0, rng) + 1;
        if num_recognizers == 1 {
            num_recognizers = 2;
        }

        let recognizers = (0..num_recognizers)
            .map(|_| self.random_pssm(self.config.pwm_length, rng).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;
        let connectors = (1..num_recognizers)
            .map(|_| Arc::new(self.random_connector(rng)))
            .collect();

        Organism::new(self.ids.next_id(), recognizers, connectors)
    }

    pub fn random_population<R: Rng>(&self, size: usize, rng: &mut R) -> Result<Vec<Organism>> {
        (0..size).map(|_| self.random_organism(rng)).collect()
    }

    /// Connector with integer `mu` and `sigma` drawn uniformly within the configured bounds
    pub fn random_connector<R: Rng>(&self, rng: &mut R) -> Connector {
        let mu = rng.gen_range(self.config.min_mu..=self.config.max_mu);
        let sigma = rng.gen_range(self.config.min_sigma..=self.config.max_sigma);
        Connector::new(mu as f64, sigma as f64)
    }

    pub fn random_pssm<R: Rng>(&self, length: usize, rng: &mut R) -> Result<Pssm> {
        let pwm = (0..length).map(|_| self.pwm_column(rng)).collect();
        Pssm::new(pwm, self.pseudocount)
    }

    /// One PWM column. `base / step` binding sites are spread over the four bases,
    /// every base getting at least one, then shuffled so the richest base is not
    /// always first.
    pub fn pwm_column<R: Rng>(&self, rng: &mut R) -> BaseProbabilities {
        let mut left = self.config.sites_per_column() as i64;
        let mut counts = [0i64; 4];

        for (slot, reserved) in (0..4i64).rev().enumerate() {
            let count = if left > reserved {
                rng.gen_range(1..=left - reserved)
            } else {
                1
            };
            left -= count;
            counts[slot] = count;
        }
        if left > 0 {
            counts[3] += left;
        }
        counts.shuffle(rng);

        let scale = self.config.pwm_probability_step as f64 / self.config.pwm_probability_base as f64;
        let factor = 10f64.powi(self.config.pwm_probability_decimals as i32);
        let p = counts.map(|count| (count as f64 * scale * factor).round() / factor);

        BaseProbabilities {
            a: p[0],
            g: p[1],
            c: p[2],
            t: p[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn factory(ids: &IdAllocator) -> OrganismFactory<'_> {
        OrganismFactory::new(OrganismConfig::default(), &PssmConfig::default(), ids)
    }

    #[test]
    fn test_pwm_column_is_distribution() {
        let ids = IdAllocator::new();
        let factory = factory(&ids);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let column = factory.pwm_column(&mut rng);
            assert!((column.total() - 1.0).abs() < 1e-9);
            // 20 sites, each base at least one
            for p in [column.a, column.c, column.g, column.t] {
                assert!(p >= 0.05 - 1e-12);
            }
        }
    }

    #[test]
    fn test_random_organisms_are_recombinable() {
        let ids = IdAllocator::new();
        let factory = factory(&ids);
        let mut rng = StdRng::seed_from_u64(7);

        let population = factory.random_population(50, &mut rng).unwrap();
        assert_eq!(population.len(), 50);
        for organism in &population {
            assert!(organism.ensure_recombinable().is_ok());
            assert_eq!(organism.connectors().len(), organism.count_recognizers() - 1);
            assert!(organism.recognizers().iter().all(|r| r.width() == 5));
        }
        assert_eq!(ids.last_issued(), 50);
    }

    #[test]
    fn test_connector_within_bounds() {
        let ids = IdAllocator::new();
        let factory = factory(&ids);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let connector = factory.random_connector(&mut rng);
            assert!((0.0..=20.0).contains(&connector.mu));
            assert!((1.0..=5.0).contains(&connector.sigma));
        }
    }
}
