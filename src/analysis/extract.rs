//! Ordered field extractors for the analyzer's fallback chain.
//!
//! Each extractor looks at one optional source and returns `None` when the
//! source is missing or unusable. The first extractor to succeed wins.

use super::metadata::{sequence_length, StructureMetadata};
use crate::secondary_structure::{dssp, segments_from_assignments, SSType, SsSegment};

/// Residue count used when no extractor succeeds.
pub const DEFAULT_TOTAL_RESIDUES: u32 = 100;

pub type ResidueCountExtractor = fn(&StructureMetadata) -> Option<u32>;

/// Total-residue sources in priority order.
pub const TOTAL_RESIDUE_EXTRACTORS: &[(&str, ResidueCountExtractor)] = &[
    ("instance sequence", instance_sequence_length),
    ("instance annotation", instance_annotation_length),
    ("entity sequence", entity_sequence_length),
];

/// Length of the first non-empty chain/instance sequence.
pub fn instance_sequence_length(meta: &StructureMetadata) -> Option<u32> {
    meta.instances
        .iter()
        .find_map(|inst| inst.sequence.as_deref().and_then(sequence_length))
}

/// Length of the first non-empty per-residue annotation string.
pub fn instance_annotation_length(meta: &StructureMetadata) -> Option<u32> {
    meta.instances
        .iter()
        .find_map(|inst| inst.secondary_structure.as_deref().and_then(sequence_length))
}

/// Length of the first non-empty entity sequence.
pub fn entity_sequence_length(meta: &StructureMetadata) -> Option<u32> {
    meta.entities
        .iter()
        .find_map(|ent| ent.sequence.as_deref().and_then(sequence_length))
}

/// Run the extractor chain, ending at [`DEFAULT_TOTAL_RESIDUES`].
pub fn total_residues(meta: &StructureMetadata) -> u32 {
    for (source, extract) in TOTAL_RESIDUE_EXTRACTORS {
        if let Some(n) = extract(meta) {
            log::debug!("{}: {} residues from {}", meta.label(), n, source);
            return n;
        }
    }
    log::debug!(
        "{}: no residue count available, using {}",
        meta.label(),
        DEFAULT_TOTAL_RESIDUES
    );
    DEFAULT_TOTAL_RESIDUES
}

/// Every annotated helix and sheet range across all instances.
///
/// Explicit ranges take precedence; an instance without any falls back to
/// the helix/sheet runs of its DSSP-style string. Invalid ranges are
/// skipped.
pub fn annotated_segments(meta: &StructureMetadata) -> Vec<SsSegment> {
    let mut out = Vec::new();
    for inst in &meta.instances {
        if inst.has_ranges() {
            out.extend(inst.helices.iter().filter_map(|r| r.to_segment(SSType::Helix)));
            out.extend(inst.sheets.iter().filter_map(|r| r.to_segment(SSType::Sheet)));
        } else if let Some(ss) = inst.secondary_structure.as_deref() {
            let compact: String = ss.chars().filter(|c| !c.is_whitespace()).collect();
            out.extend(
                segments_from_assignments(&dssp::from_string(&compact))
                    .into_iter()
                    .filter(|s| s.class != SSType::Loop),
            );
        }
    }
    out
}
