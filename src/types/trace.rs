//! Per-chain Cα trace extracted from a coordinate file.

use glam::Vec3;
use serde::Serialize;

/// One chain's one-letter sequence and Cα positions.
///
/// `sequence` and `ca_positions` are parallel: the i-th character is the
/// residue whose Cα is `ca_positions[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainTrace {
    pub chain_id: String,
    pub sequence: String,
    pub ca_positions: Vec<Vec3>,
}

impl ChainTrace {
    pub fn len(&self) -> usize {
        self.ca_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ca_positions.is_empty()
    }

    /// Mean Cα position, or the origin for an empty trace.
    pub fn centroid(&self) -> Vec3 {
        if self.ca_positions.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.ca_positions.iter().copied().sum();
        sum / self.ca_positions.len() as f32
    }
}
