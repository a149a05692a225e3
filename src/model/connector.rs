use crate::utils::stats::{discretized_normal_pmf, ln_binomial, normal_cdf};
use serde::{Deserialize, Serialize};

const MIN_NUMERATOR: f64 = 0.00001;
const MIN_AUC: f64 = 0.000001;
const NULL_FLOOR: f64 = 0.0001;

/// Gap-length distribution joining two consecutive recognizers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub mu: f64,
    pub sigma: f64,
}

impl Connector {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Probability of `gap` under this connector, renormalized to the gaps that can
    /// actually occur on a sequence of `sequence_len` positions
    pub fn gap_probability(&self, gap: usize, sequence_len: usize) -> f64 {
        let numerator = discretized_normal_pmf(gap as f64, self.mu, self.sigma).max(MIN_NUMERATOR);
        if self.sigma == 0.0 {
            return numerator;
        }

        let auc = (normal_cdf(sequence_len.saturating_sub(1) as f64, self.mu, self.sigma)
            - normal_cdf(0.0, self.mu, self.sigma))
        .max(MIN_AUC);

        numerator / auc
    }

    /// Log2 ratio between [`Self::gap_probability`] and the chance of the same gap
    /// when `num_recognizers` recognizers land uniformly on `free_positions` positions
    pub fn gap_score(
        &self,
        gap: usize,
        sequence_len: usize,
        free_positions: usize,
        num_recognizers: usize,
    ) -> f64 {
        let null = null_gap_probability(gap + 1, num_recognizers, free_positions);
        (self.gap_probability(gap, sequence_len) / null).log2()
    }
}

/// C(L - d, N - 1) / C(L, N) for `1 <= d <= L - N + 1`
fn null_gap_probability(distance: usize, num_recognizers: usize, free_positions: usize) -> f64 {
    if num_recognizers == 0 || distance < 1 || distance + num_recognizers > free_positions + 1 {
        return NULL_FLOOR;
    }

    let ratio = ln_binomial(free_positions - distance, num_recognizers - 1)
        .zip(ln_binomial(free_positions, num_recognizers))
        .map(|(num, den)| (num - den).exp());

    match ratio {
        Some(p) if p > 0.0 => p,
        _ => NULL_FLOOR,
    }
}
