pub mod alignment;
pub mod batch;
pub mod compiler;
pub mod connector_table;
pub mod crossover;
pub mod recombinator;
pub mod synthesis;
pub mod units;

pub use alignment::{align_parents, AlignedRepresentation};
pub use batch::{BatchOutcome, BatchRecombinator};
pub use compiler::{AssemblyInstructions, ConnectorInstruction};
pub use connector_table::ConnectorTable;
pub use crossover::{crossover, crossover_with};
pub use recombinator::Recombinator;
pub use synthesis::{GapEstimator, SampledPlacements};
pub use units::{define_units, Unit};
