pub mod factory;
pub mod placement;
pub mod recombination;

pub use factory::OrganismFactory;
pub use placement::{DynamicPlacer, Placement, PlacementProvider};
pub use recombination::Recombinator;
