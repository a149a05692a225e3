//! Sexual recombination of motif organisms.
//!
//! An organism is a chain of PSSM recognizers joined by gap connectors. Two parents
//! placed on a shared reference sequence are aligned into a symbolic representation,
//! cut into swappable units, crossed over and compiled back into two children.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod model;
pub mod types;
pub mod utils;

pub use error::{MotifError, Result};
pub use model::{Connector, IdAllocator, Organism, OrganismId, Pssm};
pub use types::{Interval, NodeRef, ParentTag, Symbol};
