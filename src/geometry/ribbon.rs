//! Illustrative folded ribbon built from a residue sequence.
//!
//! The backbone follows an oscillating spiral that rises from y = -6 to
//! y = +6. The first 30% of residues take a tight helical path, the middle
//! 40% a wide sheet-like sweep and the last 30% a perturbed loop. These
//! regimes are fixed fractions of the chain length, not structural
//! annotations.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::rainbow_index;
use crate::secondary_structure::SSType;
use crate::types::{BackbonePoint, Element, Geometry, PointKind, SegmentKind};

/// Residue cap for generated ribbons.
pub const MAX_RIBBON_RESIDUES: usize = 100;

/// Sequence used when the caller has none (crambin, 46 residues).
pub const FALLBACK_SEQUENCE: &str = "TTCCPSIVARSNFNVCRLPGTPEAICATYTGCIIIPGATCPGDYAN";

const RIBBON_BOTTOM: f32 = -6.0;
const RIBBON_TOP: f32 = 6.0;

/// Ribbon generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonParams {
    /// Residues past this index are not generated.
    pub max_residues: usize,
    /// Chain fraction where the helical regime ends.
    pub helix_end: f32,
    /// Chain fraction where the sheet regime ends.
    pub sheet_end: f32,
    /// A side chain is emitted for every residue index divisible by this.
    pub side_chain_stride: usize,
    pub side_chain_min_length: f32,
    pub side_chain_max_length: f32,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            max_residues: MAX_RIBBON_RESIDUES,
            helix_end: 0.3,
            sheet_end: 0.7,
            side_chain_stride: 3,
            side_chain_min_length: 0.8,
            side_chain_max_length: 1.2,
        }
    }
}

impl RibbonParams {
    /// Which geometric regime a chain fraction `u` falls in.
    pub fn regime(&self, u: f32) -> SSType {
        if u < self.helix_end {
            SSType::Helix
        } else if u < self.sheet_end {
            SSType::Sheet
        } else {
            SSType::Loop
        }
    }
}

/// Backbone position for residue `i` of `len`.
pub fn backbone_position(i: usize, len: usize, params: &RibbonParams) -> Vec3 {
    let u = i as f32 / len as f32;
    let angle = u * 4.0 * TAU;
    let radius = 2.5 + 0.8 * (2.0 * angle).sin() + 0.4 * (3.0 * angle).cos();
    let height = RIBBON_BOTTOM + (RIBBON_TOP - RIBBON_BOTTOM) * u;

    let (a, r, y) = match params.regime(u) {
        // tight spiral with a fast vertical wobble
        SSType::Helix => (2.0 * angle, 0.6 * radius, height + 0.35 * (6.0 * angle).sin()),
        SSType::Sheet => (0.5 * angle, 1.2 * radius, height),
        SSType::Loop => (
            angle + 0.6 * (3.0 * angle).sin(),
            radius,
            height + 0.5 * (2.0 * angle).cos(),
        ),
    };

    Vec3::new(r * a.cos(), y, r * a.sin())
}

/// Generate a ribbon backbone with side-chain stubs.
///
/// `None` uses [`FALLBACK_SEQUENCE`]. At most `params.max_residues` residues
/// are generated. Side-chain directions and lengths are drawn from `rng`;
/// the backbone itself is deterministic.
pub fn generate_ribbon<R: Rng + ?Sized>(
    sequence: Option<&str>,
    params: &RibbonParams,
    rng: &mut R,
) -> Geometry {
    let sequence = sequence.unwrap_or(FALLBACK_SEQUENCE);
    let residues: Vec<char> = sequence.chars().take(params.max_residues).collect();
    let len = residues.len();

    let mut geom = Geometry::default();
    if len == 0 {
        return geom;
    }
    if len == params.max_residues && sequence.chars().nth(len).is_some() {
        log::debug!("ribbon capped at {} residues", params.max_residues);
    }

    let stride = params.side_chain_stride.max(1);
    let mut prev: Option<u32> = None;
    let mut side_chain_idx = 0u32;

    for (i, &code) in residues.iter().enumerate() {
        let position = backbone_position(i, len, params);
        let idx = geom.push_point(BackbonePoint {
            position,
            kind: PointKind::Backbone,
            index: i as u32,
            residue: Some(code),
            element: None,
            color: rainbow_index(i, len),
        });
        if let Some(p) = prev {
            geom.push_segment(p, idx, SegmentKind::Backbone);
        }
        prev = Some(idx);

        if i % stride == 0 {
            let element = Element::from_residue_code(code);
            let tip = position + side_chain_offset(params, rng);
            let atom = geom.push_point(BackbonePoint {
                position: tip,
                kind: PointKind::SideChainAtom,
                index: side_chain_idx,
                residue: Some(code),
                element: Some(element),
                color: element.cpk_color(),
            });
            geom.push_segment(idx, atom, SegmentKind::SideChain);
            side_chain_idx += 1;
        }
    }

    geom
}

/// Random direction on the unit sphere scaled to a length in the configured range.
fn side_chain_offset<R: Rng + ?Sized>(params: &RibbonParams, rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(-1.0f32..=1.0).acos();
    let span = params.side_chain_max_length - params.side_chain_min_length;
    let length = params.side_chain_min_length + span * rng.gen::<f32>();

    let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
    dir * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ribbon(seq: Option<&str>, seed: u64) -> Geometry {
        generate_ribbon(seq, &RibbonParams::default(), &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_fallback_sequence() {
        assert_eq!(FALLBACK_SEQUENCE.len(), 46);
        let geom = ribbon(None, 1);
        assert_eq!(geom.count_points(PointKind::Backbone), 46);
        assert_eq!(geom.count_segments(SegmentKind::SideChain), 16);
    }

    #[test]
    fn test_length_cap() {
        let long = "A".repeat(250);
        let geom = ribbon(Some(&long), 1);
        assert_eq!(geom.count_points(PointKind::Backbone), 100);
        assert_eq!(geom.count_segments(SegmentKind::SideChain), 34);
        assert_eq!(geom.count_segments(SegmentKind::Backbone), 99);
    }

    #[test]
    fn test_empty_sequence() {
        let geom = ribbon(Some(""), 1);
        assert!(geom.is_empty());
        assert!(geom.segments.is_empty());
    }

    #[test]
    fn test_single_residue() {
        let geom = ribbon(Some("M"), 1);
        assert_eq!(geom.count_points(PointKind::Backbone), 1);
        assert_eq!(geom.count_segments(SegmentKind::Backbone), 0);
        assert_eq!(geom.count_segments(SegmentKind::SideChain), 1);
    }

    #[test]
    fn test_seeded_reproducible() {
        let seq = "MKTAYIAKQRQISFVKSHFSRQ";
        assert_eq!(ribbon(Some(seq), 99), ribbon(Some(seq), 99));
    }

    #[test]
    fn test_backbone_independent_of_seed() {
        let seq = "MKTAYIAKQRQISFVKSHFSRQ";
        let a = ribbon(Some(seq), 1);
        let b = ribbon(Some(seq), 2);
        let bb_a: Vec<_> = a.points_of(PointKind::Backbone).map(|p| p.position).collect();
        let bb_b: Vec<_> = b.points_of(PointKind::Backbone).map(|p| p.position).collect();
        assert_eq!(bb_a, bb_b);
    }

    #[test]
    fn test_side_chain_lengths() {
        let geom = ribbon(Some(&"ACDEFGHIKLMNPQRSTVWY".repeat(5)), 7);
        for seg in geom.segments_of(SegmentKind::SideChain) {
            let (a, b) = geom.segment_positions(seg).unwrap();
            let d = a.distance(b);
            assert!((0.8 - 1e-4..=1.2 + 1e-4).contains(&d), "length {d}");
        }
    }

    #[test]
    fn test_side_chain_elements() {
        let geom = ribbon(Some("SxxNxxWxxc"), 3);
        let atoms: Vec<_> = geom.points_of(PointKind::SideChainAtom).collect();
        assert_eq!(atoms.len(), 4);
        assert_eq!(atoms[0].element, Some(Element::S));
        assert_eq!(atoms[1].element, Some(Element::N));
        assert_eq!(atoms[2].element, Some(Element::C));
        assert_eq!(atoms[3].element, Some(Element::C));
        assert_eq!(atoms[3].residue, Some('c'));
        let indices: Vec<u32> = atoms.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rainbow_gradient() {
        let geom = ribbon(Some(&"A".repeat(40)), 1);
        let backbone: Vec<_> = geom.points_of(PointKind::Backbone).collect();
        assert_eq!(backbone[0].color, [0.0, 0.0, 1.0]);
        assert_eq!(backbone.last().unwrap().color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_residue_is_blue() {
        let geom = ribbon(Some("W"), 1);
        assert_eq!(geom.points[0].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unseeded_rng_accepted() {
        let geom = generate_ribbon(None, &RibbonParams::default(), &mut rand::thread_rng());
        assert_eq!(geom.count_points(PointKind::Backbone), 46);
    }

    #[test]
    fn test_height_rises() {
        let geom = ribbon(Some(&"G".repeat(100)), 1);
        let backbone: Vec<_> = geom.points_of(PointKind::Backbone).collect();
        // wobble never exceeds 0.5, so ends are well separated
        assert!(backbone[0].position.y < -5.0);
        assert!(backbone[99].position.y > 5.0);
    }

    #[test]
    fn test_regimes() {
        let params = RibbonParams::default();
        assert_eq!(params.regime(0.0), SSType::Helix);
        assert_eq!(params.regime(0.29), SSType::Helix);
        assert_eq!(params.regime(0.3), SSType::Sheet);
        assert_eq!(params.regime(0.69), SSType::Sheet);
        assert_eq!(params.regime(0.7), SSType::Loop);
        assert_eq!(params.regime(0.99), SSType::Loop);
    }

    #[test]
    fn test_helix_regime_is_tighter() {
        let params = RibbonParams::default();
        let n = 100;
        let helix_max = (0..30)
            .map(|i| {
                let p = backbone_position(i, n, &params);
                (p.x * p.x + p.z * p.z).sqrt()
            })
            .fold(0.0f32, f32::max);
        // radius oscillates within [1.3, 3.7]; helix scales it by 0.6
        assert!(helix_max <= 0.6 * 3.7 + 1e-4);
    }
}
