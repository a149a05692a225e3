use super::{Connector, OrganismId, Pssm};
use crate::error::{MotifError, Result};
use std::sync::Arc;

/// Chain of recognizers joined by connectors: `R0 C0 R1 C1 ... Rn-1`.
///
/// Recognizers and connectors sit behind `Arc` so children reuse parental nodes by
/// reference; nothing here hands out mutable access to a shared node.
#[derive(Debug, Clone)]
pub struct Organism {
    id: OrganismId,
    recognizers: Vec<Arc<Pssm>>,
    connectors: Vec<Arc<Connector>>,
}

impl Organism {
    pub fn new(
        id: OrganismId,
        recognizers: Vec<Arc<Pssm>>,
        connectors: Vec<Arc<Connector>>,
    ) -> Result<Self> {
        if recognizers.is_empty() {
            return Err(MotifError::MalformedOrganism(format!(
                "organism {} has no recognizers",
                id
            )));
        }
        if connectors.len() + 1 != recognizers.len() {
            return Err(MotifError::MalformedOrganism(format!(
                "organism {} has {} recognizers but {} connectors",
                id,
                recognizers.len(),
                connectors.len()
            )));
        }

        Ok(Self {
            id,
            recognizers,
            connectors,
        })
    }

    pub fn id(&self) -> OrganismId {
        self.id
    }

    pub fn recognizers(&self) -> &[Arc<Pssm>] {
        &self.recognizers
    }

    pub fn connectors(&self) -> &[Arc<Connector>] {
        &self.connectors
    }

    pub fn recognizer(&self, index: usize) -> Option<&Arc<Pssm>> {
        self.recognizers.get(index)
    }

    pub fn connector(&self, index: usize) -> Option<&Arc<Connector>> {
        self.connectors.get(index)
    }

    pub fn count_recognizers(&self) -> usize {
        self.recognizers.len()
    }

    /// Sum of recognizer widths, the shortest sequence the organism fits on
    pub fn total_width(&self) -> usize {
        self.recognizers.iter().map(|r| r.width()).sum()
    }

    /// Recombination needs at least one connector to reason about
    pub fn ensure_recombinable(&self) -> Result<()> {
        if self.recognizers.len() < 2 {
            return Err(MotifError::MalformedParent {
                id: self.id,
                recognizers: self.recognizers.len(),
            });
        }
        Ok(())
    }
}
