use thiserror::Error;

use crate::model::OrganismId;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Malformed parent {id}: {recognizers} recognizer(s), at least 2 are required")]
    MalformedParent { id: OrganismId, recognizers: usize },

    #[error("Malformed organism: {0}")]
    MalformedOrganism(String),

    #[error("Sequence sample is empty, connector statistics cannot be estimated")]
    EmptySample,

    #[error("Child {id} compiled to {recognizers} recognizer(s), at least 2 are required")]
    DegenerateChild { id: OrganismId, recognizers: usize },

    #[error("Sequence too short: organism needs {needed} positions, sequence has {available}")]
    SequenceTooShort { needed: usize, available: usize },

    #[error("Placement error: {0}")]
    Placement(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MotifError>;
