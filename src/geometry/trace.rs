//! Ribbon backbone from real Cα coordinates.

use super::color::rainbow_index;
use super::ribbon::RibbonParams;
use crate::types::{BackbonePoint, ChainTrace, Geometry, PointKind, SegmentKind};

/// Build a backbone ribbon from a chain trace, centred on its centroid.
///
/// Uses the same residue cap and rainbow gradient as
/// [`generate_ribbon`](super::ribbon::generate_ribbon) but takes positions
/// from the trace instead of the procedural spiral. No side chains are
/// emitted and the output is deterministic.
pub fn ribbon_from_trace(trace: &ChainTrace, params: &RibbonParams) -> Geometry {
    let mut geom = Geometry::default();
    let len = trace.len().min(params.max_residues);
    if len == 0 {
        return geom;
    }

    let center = trace.centroid();
    let mut codes = trace.sequence.chars();
    let mut prev: Option<u32> = None;

    for (i, &ca) in trace.ca_positions.iter().take(len).enumerate() {
        let idx = geom.push_point(BackbonePoint {
            position: ca - center,
            kind: PointKind::Backbone,
            index: i as u32,
            residue: codes.next(),
            element: None,
            color: rainbow_index(i, len),
        });
        if let Some(p) = prev {
            geom.push_segment(p, idx, SegmentKind::Backbone);
        }
        prev = Some(idx);
    }

    geom
}
