pub mod organisms;
pub mod sequences;

pub use organisms::{export_organisms, import_organisms, organisms_from_json, organisms_to_json, ChainElement};
pub use sequences::{parse_sequences, read_sequences};
