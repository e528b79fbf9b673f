//! Procedural molecular geometry for illustrative visualization.
//!
//! Two motifs:
//! - `helix`: parametric double helix (deterministic)
//! - `ribbon`: folded single-chain backbone from a sequence, with side-chain
//!   stubs placed by a caller-supplied [`rand::Rng`]
//!
//! `trace` turns real Cα coordinates into the same ribbon layout when a
//! coordinate file is available.

pub mod color;
pub mod helix;
pub mod ribbon;
pub mod trace;

pub use color::{rainbow, rainbow_index};
pub use helix::{generate_double_helix, DoubleHelixParams};
pub use ribbon::{
    backbone_position, generate_ribbon, RibbonParams, FALLBACK_SEQUENCE, MAX_RIBBON_RESIDUES,
};
pub use trace::ribbon_from_trace;
