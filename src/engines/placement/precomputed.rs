use super::{Placement, PlacementProvider};
use crate::error::{MotifError, Result};
use crate::model::{Organism, OrganismId};
use std::collections::HashMap;

/// Serves placements computed elsewhere, keyed by organism id and sequence
#[derive(Debug, Clone, Default)]
pub struct PrecomputedPlacer {
    placements: HashMap<(OrganismId, String), Placement>,
}

impl PrecomputedPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, organism: OrganismId, sequence: impl Into<String>, placement: Placement) {
        self.placements.insert((organism, sequence.into()), placement);
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl PlacementProvider for PrecomputedPlacer {
    fn place(&self, organism: &Organism, sequence: &str) -> Result<Placement> {
        let placement = self
            .placements
            .get(&(organism.id(), sequence.to_string()))
            .cloned()
            .ok_or_else(|| {
                MotifError::Placement(format!(
                    "no placement recorded for organism {} on a sequence of length {}",
                    organism.id(),
                    sequence.len()
                ))
            })?;
        placement.check_matches(organism)?;
        Ok(placement)
    }
}
