//! Format adapters turning fetched coordinate text into chain traces.

pub mod pdb;

// Re-export commonly used items
pub use pdb::{parse_chains, parse_chains_auto, three_to_one, StructureError, StructureFormat};
