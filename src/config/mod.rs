pub mod traits;
pub mod organism;
pub mod pssm;
pub mod recombination;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use organism::OrganismConfig;
pub use pssm::PssmConfig;
pub use recombination::RecombinationConfig;
pub use traits::ConfigSection;
