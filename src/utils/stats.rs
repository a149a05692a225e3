// src/utils/stats.rs
use rand::Rng;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with `n` in the denominator
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|&v| (v - mean).powi(2))
        .sum::<f64>() / values.len() as f64;

    Some(variance.sqrt())
}

/// Abramowitz & Stegun 7.1.26, absolute error below 1.5e-7
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));

    sign * (1.0 - poly * (-x * x).exp())
}

pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma.abs();
    (1.0 + erf(z / std::f64::consts::SQRT_2)) / 2.0
}

/// Probability mass of the integer `x` under a normal discretized to unit bins
pub fn discretized_normal_pmf(x: f64, mu: f64, sigma: f64) -> f64 {
    if sigma == 0.0 {
        return if x == mu { 1.0 } else { 0.0 };
    }
    normal_cdf(x + 0.5, mu, sigma) - normal_cdf(x - 0.5, mu, sigma)
}

/// ln C(n, k), `None` when k > n
pub fn ln_binomial(n: usize, k: usize) -> Option<f64> {
    if k > n {
        return None;
    }
    let k = k.min(n - k);
    let value = (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum();
    Some(value)
}

/// Knuth's multiplication method, fine for the small lambdas used for chain lengths
pub fn sample_poisson<R: Rng>(lambda: f64, rng: &mut R) -> usize {
    if lambda <= 0.0 {
        return 0;
    }
    let threshold = (-lambda).exp();
    let mut count = 0;
    let mut product: f64 = rng.gen();

    while product > threshold {
        count += 1;
        product *= rng.gen::<f64>();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_std_dev() {
        let std = population_std_dev(&[3.0, 5.0, 4.0]).unwrap();
        assert!((std - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn test_erf_reference_values() {
        assert!(erf(0.0).abs() < 1e-7);
        assert!((erf(1.0) - 0.842_700_79).abs() < 1e-6);
        assert!((erf(-1.0) + 0.842_700_79).abs() < 1e-6);
    }

    #[test]
    fn test_discretized_pmf_sums_to_one() {
        let total: f64 = (-50..=50)
            .map(|x| discretized_normal_pmf(x as f64, 3.0, 4.0))
            .sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert_eq!(discretized_normal_pmf(2.0, 2.0, 0.0), 1.0);
    }

    #[test]
    fn test_ln_binomial() {
        assert!((ln_binomial(5, 2).unwrap() - 10f64.ln()).abs() < 1e-12);
        assert_eq!(ln_binomial(7, 0), Some(0.0));
        assert_eq!(ln_binomial(2, 3), None);
    }

    #[test]
    fn test_poisson_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 20_000;
        let total: usize = (0..draws).map(|_| sample_poisson(3.0, &mut rng)).sum();
        let mean = total as f64 / draws as f64;
        assert!((mean - 3.0).abs() < 0.1);
    }
}
