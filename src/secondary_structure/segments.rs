//! Residue-range segments and loop gap filling.

use serde::{Deserialize, Serialize};

use super::SSType;

/// A run of residues sharing one class. 1-based, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SsSegment {
    pub class: SSType,
    pub begin: u32,
    pub end: u32,
}

impl SsSegment {
    pub fn new(class: SSType, begin: u32, end: u32) -> Self {
        Self { class, begin, end }
    }

    /// Residues covered; 0 for an inverted range.
    pub fn len(&self) -> u32 {
        if self.end < self.begin {
            0
        } else {
            (self.end - self.begin).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"12-18"`, or `"12"` for a single residue.
    pub fn range_label(&self) -> String {
        if self.begin == self.end {
            self.begin.to_string()
        } else {
            format!("{}-{}", self.begin, self.end)
        }
    }
}

/// Cover `[1, total]` with the given helix/sheet segments plus loop
/// segments for every gap.
///
/// Input segments are sorted, clipped to `[1, total]`, and trimmed where
/// they overlap an earlier segment, so the result is ordered and has no
/// overlaps or holes. Loop segments in the input are ignored.
pub fn fill_loops(annotated: &[SsSegment], total: u32) -> Vec<SsSegment> {
    let mut sorted: Vec<SsSegment> = annotated
        .iter()
        .filter(|s| s.class != SSType::Loop && !s.is_empty())
        .copied()
        .collect();
    sorted.sort_by_key(|s| (s.begin, s.end));

    let mut out = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut next = 1u32;

    for seg in sorted {
        let begin = seg.begin.max(next);
        let end = seg.end.min(total);
        if begin > end {
            continue;
        }
        if begin > next {
            out.push(SsSegment::new(SSType::Loop, next, begin - 1));
        }
        out.push(SsSegment::new(seg.class, begin, end));
        next = end + 1;
    }

    if next <= total {
        out.push(SsSegment::new(SSType::Loop, next, total));
    }

    out
}

/// Group per-residue classes into runs. Residue numbering starts at 1.
pub fn segments_from_assignments(assignments: &[SSType]) -> Vec<SsSegment> {
    let mut out: Vec<SsSegment> = Vec::new();
    for (i, &class) in assignments.iter().enumerate() {
        let resnum = i as u32 + 1;
        match out.last_mut() {
            Some(last) if last.class == class && last.end + 1 == resnum => last.end = resnum,
            _ => out.push(SsSegment::new(class, resnum, resnum)),
        }
    }
    out
}
