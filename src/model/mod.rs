pub mod connector;
pub mod ids;
pub mod organism;
pub mod pssm;

pub use connector::Connector;
pub use ids::{IdAllocator, OrganismId};
pub use organism::Organism;
pub use pssm::{BaseProbabilities, Pssm};
