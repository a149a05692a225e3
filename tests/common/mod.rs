#![allow(dead_code)]

use motifevo::engines::placement::Placement;
use motifevo::model::{BaseProbabilities, Connector, Organism, OrganismId, Pssm};
use motifevo::types::Interval;
use std::sync::Arc;

/// Organism of `widths.len()` uniform recognizers; connector `i` has `mu = 10 * id + i`
/// so connectors of different organisms are told apart
pub fn organism(id: OrganismId, widths: &[usize]) -> Organism {
    let column = BaseProbabilities::new(0.25, 0.25, 0.25, 0.25);
    let recognizers = widths
        .iter()
        .map(|&w| Arc::new(Pssm::new(vec![column; w], 0.01).unwrap()))
        .collect();
    let connectors = (1..widths.len())
        .map(|i| Arc::new(Connector::new((10 * id) as f64 + (i - 1) as f64, 1.0)))
        .collect();
    Organism::new(id, recognizers, connectors).unwrap()
}

pub fn placement(spans: &[(usize, usize)]) -> Placement {
    Placement::new(spans.iter().map(|&(a, b)| Interval::new(a, b)).collect())
}

/// Organism sized to match `spans`
pub fn organism_for(id: OrganismId, spans: &[(usize, usize)]) -> Organism {
    let widths: Vec<usize> = spans.iter().map(|&(a, b)| b - a).collect();
    organism(id, &widths)
}

pub fn sequence(len: usize) -> String {
    "ACGT".chars().cycle().take(len).collect()
}
