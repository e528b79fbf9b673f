//! Composition statistics for secondary structure and estimated atom/bond
//! counts.
//!
//! Atom and bond figures are population-average multipliers applied to the
//! residue count, not counts from coordinates. Multipliers are stored in
//! thousandths so the floor is exact integer arithmetic.

use serde::Serialize;

use crate::secondary_structure::{fill_loops, SSType, SsSegment};

/// Residues per estimated loop segment. The loop segment count shown to
/// users is `max(1, loop_residues / LOOP_BUCKET_SIZE)`; it is a display
/// bucket, not a count of real gaps.
pub const LOOP_BUCKET_SIZE: u32 = 10;

pub const CARBON_PER_RESIDUE_MILLI: u64 = 4500;
pub const NITROGEN_PER_RESIDUE_MILLI: u64 = 1200;
pub const OXYGEN_PER_RESIDUE_MILLI: u64 = 800;
pub const SULFUR_PER_RESIDUE_MILLI: u64 = 80;

pub const COVALENT_PER_RESIDUE_MILLI: u64 = 3800;
pub const HYDROGEN_PER_RESIDUE_MILLI: u64 = 450;
pub const DISULFIDE_PER_RESIDUE_MILLI: u64 = 20;

/// Per-class totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassStats {
    pub segments: u32,
    pub residues: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AtomCounts {
    pub carbon: u64,
    pub nitrogen: u64,
    pub oxygen: u64,
    pub sulfur: u64,
}

impl AtomCounts {
    pub fn estimate(total_residues: u32) -> Self {
        let n = total_residues as u64;
        Self {
            carbon: scale(n, CARBON_PER_RESIDUE_MILLI),
            nitrogen: scale(n, NITROGEN_PER_RESIDUE_MILLI),
            oxygen: scale(n, OXYGEN_PER_RESIDUE_MILLI),
            sulfur: scale(n, SULFUR_PER_RESIDUE_MILLI),
        }
    }

    pub fn total(&self) -> u64 {
        self.carbon + self.nitrogen + self.oxygen + self.sulfur
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BondCounts {
    pub covalent: u64,
    pub hydrogen: u64,
    pub disulfide: u64,
}

impl BondCounts {
    pub fn estimate(total_residues: u32) -> Self {
        let n = total_residues as u64;
        Self {
            covalent: scale(n, COVALENT_PER_RESIDUE_MILLI),
            hydrogen: scale(n, HYDROGEN_PER_RESIDUE_MILLI),
            disulfide: scale(n, DISULFIDE_PER_RESIDUE_MILLI),
        }
    }
}

fn scale(residues: u64, per_residue_milli: u64) -> u64 {
    residues * per_residue_milli / 1000
}

/// Aggregate statistics for one structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureStatistics {
    pub total_residues: u32,
    pub helix: ClassStats,
    pub sheet: ClassStats,
    #[serde(rename = "loop")]
    pub loop_: ClassStats,
    pub atoms: AtomCounts,
    pub bonds: BondCounts,
}

impl StructureStatistics {
    pub fn class(&self, class: SSType) -> &ClassStats {
        match class {
            SSType::Helix => &self.helix,
            SSType::Sheet => &self.sheet,
            SSType::Loop => &self.loop_,
        }
    }

    pub fn percent_sum(&self) -> u32 {
        self.helix.percent + self.sheet.percent + self.loop_.percent
    }
}

/// Display record for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub class: SSType,
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub count: u32,
    /// e.g. `"3-10, 20-25"`
    pub residue_ranges: String,
    pub description: String,
    pub ranges: Vec<SsSegment>,
}

impl ClassSummary {
    pub fn new(class: SSType, count: u32, ranges: Vec<SsSegment>) -> Self {
        let residue_ranges = if ranges.is_empty() {
            "none".to_string()
        } else {
            ranges
                .iter()
                .map(SsSegment::range_label)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            class,
            name: class.name().to_string(),
            color: class.hex_color(),
            count,
            residue_ranges,
            description: class.description().to_string(),
            ranges,
        }
    }
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Derived from the supplied metadata.
    Computed,
    /// The fixed placeholder dataset; nothing was computed.
    Default,
}

/// Result of one analyzer call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureAnalysis {
    pub source: AnalysisSource,
    pub statistics: StructureStatistics,
    pub summaries: Vec<ClassSummary>,
}

impl StructureAnalysis {
    pub fn is_default(&self) -> bool {
        self.source == AnalysisSource::Default
    }

    pub fn summary(&self, class: SSType) -> Option<&ClassSummary> {
        self.summaries.iter().find(|s| s.class == class)
    }
}

/// `round(100 * part / total)`, 0 for an empty total.
pub fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}

/// Estimated loop segment count for a loop residue total.
pub fn loop_segment_estimate(loop_residues: u32) -> u32 {
    (loop_residues / LOOP_BUCKET_SIZE).max(1)
}

/// Compute statistics from a residue total and annotated helix/sheet
/// segments.
///
/// Segments are resolved with [`fill_loops`] first: clipped to
/// `[1, total]`, and where ranges overlap the earlier-starting one keeps
/// the shared residues. Counts and reported ranges both come from that
/// resolved cover, so helix + sheet + loop == total and the loop count
/// equals the residues spanned by the loop ranges.
pub fn compute(total: u32, annotated: &[SsSegment]) -> StructureAnalysis {
    let resolved = fill_loops(annotated, total);

    let raw: u64 = annotated
        .iter()
        .filter(|s| s.class != SSType::Loop)
        .map(|s| s.len() as u64)
        .sum();

    let mut helix_ranges: Vec<SsSegment> = Vec::new();
    let mut sheet_ranges: Vec<SsSegment> = Vec::new();
    let mut loop_ranges: Vec<SsSegment> = Vec::new();
    for seg in resolved {
        match seg.class {
            SSType::Helix => helix_ranges.push(seg),
            SSType::Sheet => sheet_ranges.push(seg),
            SSType::Loop => loop_ranges.push(seg),
        }
    }

    let helix_residues: u32 = helix_ranges.iter().map(SsSegment::len).sum();
    let sheet_residues: u32 = sheet_ranges.iter().map(SsSegment::len).sum();
    let loop_residues: u32 = loop_ranges.iter().map(SsSegment::len).sum();
    if raw > (helix_residues + sheet_residues) as u64 {
        log::debug!(
            "annotated spans cover {} residues, {} after clipping to 1-{}",
            raw,
            helix_residues + sheet_residues,
            total
        );
    }

    let helix = ClassStats {
        segments: helix_ranges.len() as u32,
        residues: helix_residues,
        percent: percent(helix_residues, total),
    };
    let sheet = ClassStats {
        segments: sheet_ranges.len() as u32,
        residues: sheet_residues,
        percent: percent(sheet_residues, total),
    };
    let loop_ = ClassStats {
        segments: loop_segment_estimate(loop_residues),
        residues: loop_residues,
        percent: percent(loop_residues, total),
    };

    let mut summaries = Vec::with_capacity(3);
    for (class, stats, ranges) in [
        (SSType::Helix, &helix, helix_ranges),
        (SSType::Sheet, &sheet, sheet_ranges),
        (SSType::Loop, &loop_, loop_ranges),
    ] {
        if stats.segments > 0 {
            summaries.push(ClassSummary::new(class, stats.segments, ranges));
        }
    }

    StructureAnalysis {
        source: AnalysisSource::Computed,
        statistics: StructureStatistics {
            total_residues: total,
            helix,
            sheet,
            loop_,
            atoms: AtomCounts::estimate(total),
            bonds: BondCounts::estimate(total),
        },
        summaries,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn annotated() -> impl Strategy<Value = Vec<SsSegment>> {
        proptest::collection::vec(
            (prop_oneof![Just(SSType::Helix), Just(SSType::Sheet)], 0u32..400, 0u32..60)
                .prop_map(|(class, begin, len)| SsSegment::new(class, begin, begin + len)),
            0..15,
        )
    }

    proptest! {
        #[test]
        fn residues_sum_to_total(total in 1u32..500, segs in annotated()) {
            let a = compute(total, &segs);
            let s = &a.statistics;
            prop_assert_eq!(s.helix.residues + s.sheet.residues + s.loop_.residues, total);
            let loop_cover: u32 = a
                .summary(SSType::Loop)
                .map_or(0, |l| l.ranges.iter().map(SsSegment::len).sum());
            prop_assert_eq!(s.loop_.residues, loop_cover);
        }

        #[test]
        fn percent_drift_bounded(total in 1u32..500, segs in annotated()) {
            let s = compute(total, &segs).statistics;
            let sum = s.percent_sum() as i64;
            prop_assert!((sum - 100).abs() <= 2, "sum = {}", sum);
        }

        #[test]
        fn atoms_scale_linearly(total in 0u32..100_000) {
            let atoms = AtomCounts::estimate(total);
            prop_assert_eq!(atoms.carbon, total as u64 * 9 / 2);
            prop_assert_eq!(atoms.sulfur, total as u64 * 2 / 25);
        }
    }
}
