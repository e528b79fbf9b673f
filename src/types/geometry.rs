//! Point and segment containers handed to renderers.
//!
//! A [`Geometry`] is a flat point list plus segments that reference points
//! by their position in that list. Points carry a [`PointKind`] tag and an
//! index that is contiguous within one kind, so a renderer can draw each
//! strand as a polyline without re-sorting.

use glam::Vec3;
use serde::Serialize;

use super::element::Element;

/// Role of a generated point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointKind {
    /// First strand of a double helix.
    Strand1,
    /// Second strand of a double helix, opposite strand 1.
    Strand2,
    /// Midpoint between the two strands at an even index.
    BasePair,
    /// Single-chain ribbon backbone.
    Backbone,
    /// Terminal atom of a side-chain stub.
    SideChainAtom,
}

/// Role of a segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentKind {
    /// Consecutive points of one strand or chain.
    Backbone,
    /// Strand 1 to strand 2 at the same index.
    CrossLink,
    /// Backbone point to its side-chain atom.
    SideChain,
}

/// A generated 3D position with its tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackbonePoint {
    pub position: Vec3,
    pub kind: PointKind,
    /// Position along the strand/chain, contiguous within `kind`.
    pub index: u32,
    /// One-letter residue code, when the point came from a sequence.
    pub residue: Option<char>,
    /// Element for side-chain atoms.
    pub element: Option<Element>,
    /// RGB, 0-1 range.
    pub color: [f32; 3],
}

/// A connection between two points of the same [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Index into `Geometry::points`.
    pub start: u32,
    /// Index into `Geometry::points`.
    pub end: u32,
    pub kind: SegmentKind,
}

/// Points and segments for one generated motif.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Geometry {
    pub points: Vec<BackbonePoint>,
    pub segments: Vec<Segment>,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point and return its index in `points`.
    pub fn push_point(&mut self, point: BackbonePoint) -> u32 {
        self.points.push(point);
        (self.points.len() - 1) as u32
    }

    pub fn push_segment(&mut self, start: u32, end: u32, kind: SegmentKind) {
        self.segments.push(Segment { start, end, kind });
    }

    pub fn points_of(&self, kind: PointKind) -> impl Iterator<Item = &BackbonePoint> + '_ {
        self.points.iter().filter(move |p| p.kind == kind)
    }

    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.kind == kind)
    }

    pub fn count_points(&self, kind: PointKind) -> usize {
        self.points_of(kind).count()
    }

    pub fn count_segments(&self, kind: SegmentKind) -> usize {
        self.segments_of(kind).count()
    }

    /// Endpoints of a segment as positions.
    pub fn segment_positions(&self, segment: &Segment) -> Option<(Vec3, Vec3)> {
        let a = self.points.get(segment.start as usize)?;
        let b = self.points.get(segment.end as usize)?;
        Some((a.position, b.position))
    }

    /// Flat `[x0, y0, z0, x1, ...]` positions for GPU upload.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| [p.position.x, p.position.y, p.position.z])
            .collect()
    }

    /// Flat `[start0, end0, start1, ...]` index buffer for line drawing.
    pub fn segment_indices_flat(&self) -> Vec<u32> {
        self.segments.iter().flat_map(|s| [s.start, s.end]).collect()
    }
}
