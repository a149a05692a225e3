pub mod dynamic;
pub mod precomputed;

pub use dynamic::DynamicPlacer;
pub use precomputed::PrecomputedPlacer;

use crate::error::{MotifError, Result};
use crate::model::Organism;
use crate::types::Interval;

/// Where each recognizer of one organism landed on one sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    intervals: Vec<Interval>,
    score: f64,
}

impl Placement {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self {
            intervals,
            score: 0.0,
        }
    }

    pub fn with_score(intervals: Vec<Interval>, score: f64) -> Self {
        Self { intervals, score }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn interval(&self, recognizer: usize) -> Result<Interval> {
        self.intervals.get(recognizer).copied().ok_or_else(|| {
            MotifError::Placement(format!(
                "no interval for recognizer {} in a placement of {} recognizers",
                recognizer,
                self.intervals.len()
            ))
        })
    }

    /// A placement must hold exactly one interval per recognizer
    pub fn check_matches(&self, organism: &Organism) -> Result<()> {
        if self.intervals.len() != organism.count_recognizers() {
            return Err(MotifError::Placement(format!(
                "organism {} has {} recognizers but its placement has {} intervals",
                organism.id(),
                organism.count_recognizers(),
                self.intervals.len()
            )));
        }
        Ok(())
    }
}

/// Aligns one organism against one sequence
pub trait PlacementProvider {
    fn place(&self, organism: &Organism, sequence: &str) -> Result<Placement>;
}
