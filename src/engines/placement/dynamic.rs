use super::{Placement, PlacementProvider};
use crate::error::{MotifError, Result};
use crate::model::Organism;
use crate::types::Interval;

/// Optimal placement by dynamic programming over recognizer offsets.
///
/// Recognizer `i` can only start where every preceding recognizer fits before it
/// and every following one fits after it. Working in "alignment offsets" (start
/// minus the widths of the preceding recognizers) makes the gap between two
/// consecutive recognizers equal to the difference of their offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicPlacer;

impl DynamicPlacer {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementProvider for DynamicPlacer {
    fn place(&self, organism: &Organism, sequence: &str) -> Result<Placement> {
        let seq = sequence.as_bytes();
        let needed = organism.total_width();
        if needed > seq.len() {
            return Err(MotifError::SequenceTooShort {
                needed,
                available: seq.len(),
            });
        }

        let num_rec = organism.count_recognizers();
        let free_positions = seq.len() - needed;
        let num_offsets = free_positions + 1;

        let mut forward_offsets = Vec::with_capacity(num_rec);
        let mut acc = 0;
        for recognizer in organism.recognizers() {
            forward_offsets.push(acc);
            acc += recognizer.width();
        }

        // recognizer scores at every admissible offset
        let scores: Vec<Vec<f64>> = organism
            .recognizers()
            .iter()
            .zip(&forward_offsets)
            .map(|(recognizer, &fwd)| {
                (0..num_offsets)
                    .map(|j| recognizer.score(&seq[fwd + j..fwd + j + recognizer.width()]))
                    .collect()
            })
            .collect();

        let mut best = scores[0].clone();
        let mut backpointers: Vec<Vec<usize>> = Vec::with_capacity(num_rec.saturating_sub(1));

        for (i, connector) in organism.connectors().iter().enumerate() {
            let gap_scores: Vec<f64> = (0..num_offsets)
                .map(|gap| connector.gap_score(gap, seq.len(), free_positions, num_rec))
                .collect();

            let mut next = vec![f64::NEG_INFINITY; num_offsets];
            let mut back = vec![0; num_offsets];

            for j in 0..num_offsets {
                for k in 0..=j {
                    let candidate = best[k] + gap_scores[j - k] + scores[i + 1][j];
                    if candidate > next[j] {
                        next[j] = candidate;
                        back[j] = k;
                    }
                }
            }

            best = next;
            backpointers.push(back);
        }

        let mut offset = argmax(&best);
        let total_score = best[offset];

        let mut offsets = vec![0; num_rec];
        offsets[num_rec - 1] = offset;
        for i in (1..num_rec).rev() {
            offset = backpointers[i - 1][offset];
            offsets[i - 1] = offset;
        }

        let intervals = offsets
            .iter()
            .zip(&forward_offsets)
            .zip(organism.recognizers())
            .map(|((&j, &fwd), recognizer)| Interval::new(j + fwd, j + fwd + recognizer.width()))
            .collect();

        Ok(Placement::with_score(intervals, total_score))
    }
}

/// Index of the first maximum
fn argmax(values: &[f64]) -> usize {
    let mut best_idx = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best_idx] {
            best_idx = i;
        }
    }
    best_idx
}
