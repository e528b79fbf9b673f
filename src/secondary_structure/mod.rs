//! Secondary structure classes and residue-range segments.
//!
//! Provides Q3 classification (Helix, Sheet, Loop) plus:
//! - `segments`: residue ranges, gap filling and run-length grouping
//! - `auto`: fast Cα-distance heuristic (no sidechain data needed)
//! - `dssp`: DSSP-style annotation string parsing

pub mod auto;
pub mod dssp;
pub mod segments;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use segments::{fill_loops, segments_from_assignments, SsSegment};

/// Q3 secondary structure classification for a single residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SSType {
    Helix,
    Sheet,
    Loop,
}

impl SSType {
    pub const ALL: [SSType; 3] = [SSType::Helix, SSType::Sheet, SSType::Loop];

    /// Get the color for this SS type (RGB, 0-1 range).
    pub fn color(&self) -> [f32; 3] {
        match self {
            SSType::Helix => [0.9, 0.3, 0.5],
            SSType::Sheet => [0.95, 0.85, 0.3],
            SSType::Loop => [0.6, 0.85, 0.6],
        }
    }

    /// `#rrggbb` form of [`color`](Self::color) for UI legends.
    pub fn hex_color(&self) -> String {
        let [r, g, b] = self.color();
        format!(
            "#{:02x}{:02x}{:02x}",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SSType::Helix => "Alpha Helix",
            SSType::Sheet => "Beta Sheet",
            SSType::Loop => "Loop / Turn",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SSType::Helix => {
                "Right-handed coil stabilized by backbone hydrogen bonds between residues i and i+4."
            }
            SSType::Sheet => {
                "Extended strands paired side by side through inter-strand hydrogen bonds."
            }
            SSType::Loop => {
                "Irregular connecting regions and turns that link helices and strands."
            }
        }
    }
}

/// Convert isolated 1-residue helix/sheet runs to Loop.
/// These are too short for ribbon rendering and would leave residues
/// with no backbone geometry.
pub fn merge_short_segments(ss_types: &[SSType]) -> Vec<SSType> {
    let mut result = ss_types.to_vec();
    for i in 0..result.len() {
        if result[i] != SSType::Loop {
            let prev_same = i > 0 && result[i - 1] == result[i];
            let next_same = i + 1 < result.len() && result[i + 1] == result[i];
            if !prev_same && !next_same {
                result[i] = SSType::Loop;
            }
        }
    }
    result
}

/// Resolve secondary structure assignments for a chain.
///
/// If `ss_override` is provided (e.g. parsed from a DSSP string), uses it
/// directly. Otherwise detects from Cα positions with [`auto::detect`]. In
/// both cases isolated 1-residue segments are merged to Loop.
pub fn resolve(ss_override: Option<&[SSType]>, ca_positions: &[Vec3]) -> Vec<SSType> {
    let raw = match ss_override {
        Some(overrides) => overrides.to_vec(),
        None => auto::detect(ca_positions),
    };
    merge_short_segments(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_isolated() {
        use SSType::*;
        let merged = merge_short_segments(&[Loop, Helix, Loop, Sheet, Sheet, Loop, Helix]);
        assert_eq!(merged, vec![Loop, Loop, Loop, Sheet, Sheet, Loop, Loop]);
    }

    #[test]
    fn test_hex_colors() {
        let helix = SSType::Helix.hex_color();
        assert!(helix.starts_with('#') && helix.len() == 7);
        assert_eq!(SSType::Loop.hex_color(), "#99d999");
    }

    #[test]
    fn test_resolve_prefers_override() {
        use SSType::*;
        let ov = [Helix, Helix, Helix];
        assert_eq!(resolve(Some(&ov), &[]), vec![Helix, Helix, Helix]);
        assert!(resolve(None, &[]).is_empty());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SSType::Sheet).unwrap(), "\"sheet\"");
        let t: SSType = serde_json::from_str("\"loop\"").unwrap();
        assert_eq!(t, SSType::Loop);
    }
}
