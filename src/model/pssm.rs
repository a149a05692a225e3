use crate::error::{MotifError, Result};
use serde::{Deserialize, Serialize};

/// Uniform background frequency of each base
const BACKGROUND: f64 = 0.25;

/// Probability of each base at one PWM column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseProbabilities {
    pub a: f64,
    pub g: f64,
    pub c: f64,
    pub t: f64,
}

impl BaseProbabilities {
    pub fn new(a: f64, c: f64, g: f64, t: f64) -> Self {
        Self { a, g, c, t }
    }

    pub fn total(&self) -> f64 {
        self.a + self.c + self.g + self.t
    }

    fn as_array(&self) -> [f64; 4] {
        [self.a, self.c, self.g, self.t]
    }
}

/// Position-specific scoring matrix recognizer.
///
/// Holds the probability matrix it was built from plus the log2-odds matrix used
/// for scoring, so the two never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Pssm {
    pwm: Vec<BaseProbabilities>,
    log_odds: Vec<[f64; 4]>,
}

impl Pssm {
    pub fn new(pwm: Vec<BaseProbabilities>, pseudocount: f64) -> Result<Self> {
        if pwm.is_empty() {
            return Err(MotifError::MalformedOrganism(
                "PSSM must have at least one column".to_string(),
            ));
        }
        if let Some(column) = pwm.iter().find(|c| c.as_array().iter().any(|p| *p < 0.0 || !p.is_finite())) {
            return Err(MotifError::MalformedOrganism(format!(
                "PSSM column has an invalid probability: {:?}",
                column
            )));
        }

        let log_odds = pwm
            .iter()
            .map(|column| {
                let total = column.total() + 4.0 * pseudocount;
                column
                    .as_array()
                    .map(|p| (((p + pseudocount) / total) / BACKGROUND).log2())
            })
            .collect();

        Ok(Self { pwm, log_odds })
    }

    pub fn width(&self) -> usize {
        self.pwm.len()
    }

    pub fn pwm(&self) -> &[BaseProbabilities] {
        &self.pwm
    }

    /// Log2-odds score of `window`, which must be at least `width()` long.
    /// Ambiguous bases contribute nothing.
    pub fn score(&self, window: &[u8]) -> f64 {
        self.log_odds
            .iter()
            .zip(window)
            .map(|(column, base)| match base_index(*base) {
                Some(idx) => column[idx],
                None => 0.0,
            })
            .sum()
    }
}

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' => Some(3),
        _ => None,
    }
}
