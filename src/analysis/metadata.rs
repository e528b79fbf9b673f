//! Loosely-typed structure metadata handed in by the fetch layer.
//!
//! Every field is optional so that partial RCSB responses, hand-built
//! bundles and empty objects all deserialize. Field aliases accept the
//! RCSB Data API names next to the short ones.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secondary_structure::{SSType, SsSegment};

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Invalid metadata JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An annotated residue range, 1-based and inclusive.
///
/// Signed so that malformed input (negative or inverted ranges)
/// deserializes and can be skipped instead of failing the whole bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueRange {
    #[serde(alias = "beg_seq_id", alias = "start")]
    pub begin: i64,
    #[serde(alias = "end_seq_id")]
    pub end: i64,
}

impl ResidueRange {
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    /// Convert to a segment, or `None` if the range is empty, inverted,
    /// or starts below residue 1.
    pub fn to_segment(&self, class: SSType) -> Option<SsSegment> {
        if self.begin < 1 || self.end < self.begin || self.end > u32::MAX as i64 {
            return None;
        }
        Some(SsSegment::new(class, self.begin as u32, self.end as u32))
    }
}

/// Per-chain (polymer instance) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceRecord {
    #[serde(alias = "asym_id")]
    pub chain_id: Option<String>,
    #[serde(alias = "pdbx_seq_one_letter_code_can")]
    pub sequence: Option<String>,
    #[serde(alias = "helix")]
    pub helices: Vec<ResidueRange>,
    #[serde(alias = "strands", alias = "sheet")]
    pub sheets: Vec<ResidueRange>,
    /// DSSP-style per-residue string, used when no explicit ranges are given.
    #[serde(alias = "dssp")]
    pub secondary_structure: Option<String>,
}

impl InstanceRecord {
    pub fn has_ranges(&self) -> bool {
        !self.helices.is_empty() || !self.sheets.is_empty()
    }
}

/// Per-entity record; only the sequence is consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityRecord {
    #[serde(alias = "pdbx_seq_one_letter_code_can")]
    pub sequence: Option<String>,
}

/// Everything the analyzer may receive about one structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureMetadata {
    /// Structure identifier, carried through for logging only.
    #[serde(alias = "rcsb_id")]
    pub id: Option<String>,
    #[serde(alias = "polymer_entity_instances", alias = "chains")]
    pub instances: Vec<InstanceRecord>,
    #[serde(alias = "polymer_entities")]
    pub entities: Vec<EntityRecord>,
}

impl StructureMetadata {
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Metadata built from a bare sequence.
    pub fn from_sequence(sequence: &str) -> Self {
        Self {
            instances: vec![InstanceRecord {
                sequence: Some(sequence.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// A bundle with no records at all carries nothing to analyze.
    pub fn is_usable(&self) -> bool {
        !self.instances.is_empty() || !self.entities.is_empty()
    }

    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

/// Residue count of a sequence string, ignoring whitespace (RCSB wraps
/// long sequences). Empty sequences count as absent.
pub fn sequence_length(sequence: &str) -> Option<u32> {
    let n = sequence.chars().filter(|c| !c.is_whitespace()).count();
    (n > 0).then_some(n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        let meta = StructureMetadata::from_json("{}").unwrap();
        assert!(!meta.is_usable());
    }

    #[test]
    fn test_rcsb_aliases() {
        let json = r#"{
            "rcsb_id": "1CRN",
            "polymer_entity_instances": [{
                "asym_id": "A",
                "pdbx_seq_one_letter_code_can": "TTCCPSIVARSNFNVCRLPGTPEAICATYTGCIIIPGATCPGDYAN",
                "helix": [{"beg_seq_id": 7, "end_seq_id": 19}],
                "strands": [{"beg_seq_id": 1, "end_seq_id": 4}]
            }]
        }"#;
        let meta = StructureMetadata::from_json(json).unwrap();
        assert_eq!(meta.label(), "1CRN");
        assert_eq!(meta.instances.len(), 1);
        let inst = &meta.instances[0];
        assert_eq!(inst.chain_id.as_deref(), Some("A"));
        assert_eq!(inst.helices, vec![ResidueRange::new(7, 19)]);
        assert_eq!(inst.sheets, vec![ResidueRange::new(1, 4)]);
        assert!(inst.has_ranges());
    }

    #[test]
    fn test_invalid_json() {
        let err = StructureMetadata::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid metadata JSON"));
    }

    #[test]
    fn test_range_to_segment() {
        assert_eq!(
            ResidueRange::new(3, 9).to_segment(SSType::Helix),
            Some(SsSegment::new(SSType::Helix, 3, 9))
        );
        assert_eq!(ResidueRange::new(0, 9).to_segment(SSType::Helix), None);
        assert_eq!(ResidueRange::new(9, 3).to_segment(SSType::Sheet), None);
        assert_eq!(ResidueRange::new(-4, 2).to_segment(SSType::Sheet), None);
    }

    #[test]
    fn test_sequence_length() {
        assert_eq!(sequence_length("MKT\nAYI AK"), Some(8));
        assert_eq!(sequence_length(""), None);
        assert_eq!(sequence_length(" \n"), None);
    }
}
