//! Secondary-structure composition and estimated atom/bond counts.
//!
//! Analysis never fails. Missing fields fall through an ordered chain of
//! sources (see [`extract`]), and a missing or unusable bundle yields the
//! placeholder from [`default_analysis`], tagged so callers can tell it
//! apart from a computed result.

pub mod defaults;
pub mod extract;
pub mod metadata;
pub mod stats;

use crate::secondary_structure::{self, dssp, segments_from_assignments, SSType};
use crate::types::ChainTrace;

pub use defaults::default_analysis;
pub use extract::{total_residues, DEFAULT_TOTAL_RESIDUES, TOTAL_RESIDUE_EXTRACTORS};
pub use metadata::{EntityRecord, InstanceRecord, MetadataError, ResidueRange, StructureMetadata};
pub use stats::{
    AnalysisSource, AtomCounts, BondCounts, ClassStats, ClassSummary, StructureAnalysis,
    StructureStatistics, LOOP_BUCKET_SIZE,
};

/// Analyze a metadata bundle.
pub fn analyze(metadata: Option<&StructureMetadata>) -> StructureAnalysis {
    let meta = match metadata {
        Some(m) if m.is_usable() => m,
        Some(m) => {
            log::debug!("{}: metadata has no records, using default analysis", m.label());
            return default_analysis();
        }
        None => {
            log::debug!("no metadata, using default analysis");
            return default_analysis();
        }
    };

    let total = extract::total_residues(meta);
    let annotated = extract::annotated_segments(meta);
    stats::compute(total, &annotated)
}

/// Analyze a JSON metadata bundle. Unparseable input yields the default.
pub fn analyze_json(json: &str) -> StructureAnalysis {
    match StructureMetadata::from_json(json) {
        Ok(meta) => analyze(Some(&meta)),
        Err(e) => {
            log::warn!("{e}; using default analysis");
            default_analysis()
        }
    }
}

/// Analyze a bare sequence with no annotations: everything is loop.
pub fn analyze_sequence(sequence: &str) -> StructureAnalysis {
    if metadata::sequence_length(sequence).is_none() {
        return default_analysis();
    }
    analyze(Some(&StructureMetadata::from_sequence(sequence)))
}

/// Analyze per-residue assignments (residue 1 is `assignments[0]`).
pub fn analyze_assignments(assignments: &[SSType]) -> StructureAnalysis {
    if assignments.is_empty() {
        return default_analysis();
    }
    let annotated: Vec<_> = segments_from_assignments(assignments)
        .into_iter()
        .filter(|s| s.class != SSType::Loop)
        .collect();
    stats::compute(assignments.len() as u32, &annotated)
}

/// Analyze a DSSP-style annotation string.
pub fn analyze_dssp(ss: &str) -> StructureAnalysis {
    let compact: String = ss.chars().filter(|c| !c.is_whitespace()).collect();
    analyze_assignments(&dssp::from_string(&compact))
}

/// Analyze a Cα trace using the distance heuristic.
pub fn analyze_trace(trace: &ChainTrace) -> StructureAnalysis {
    analyze_assignments(&secondary_structure::resolve(None, &trace.ca_positions))
}
