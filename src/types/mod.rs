//! Core data types for the molsketch crate.

pub mod element;
pub mod geometry;
pub mod trace;

// Re-export commonly used items
pub use element::Element;
pub use geometry::{BackbonePoint, Geometry, PointKind, Segment, SegmentKind};
pub use trace::ChainTrace;
