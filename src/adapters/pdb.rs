//! PDB and mmCIF text to per-chain Cα traces.

use pdbtbx::{
    ContainsAtomConformer, ContainsAtomConformerResidue, ContainsAtomConformerResidueChain,
    Format, ReadOptions, StrictnessLevel,
};
use std::collections::HashSet;
use std::io::BufReader;

use glam::Vec3;
use thiserror::Error;

use crate::types::ChainTrace;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Failed to parse structure: {0}")]
    Parse(String),
    #[error("No Cα atoms found in structure")]
    Empty,
}

/// Text format of a coordinate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Pdb,
    Mmcif,
}

impl StructureFormat {
    /// Guess the format from the first non-blank line: mmCIF files open
    /// with a `data_` block header.
    pub fn detect(text: &str) -> Self {
        let first = text.lines().map(str::trim).find(|l| !l.is_empty());
        match first {
            Some(line) if line.starts_with("data_") => StructureFormat::Mmcif,
            _ => StructureFormat::Pdb,
        }
    }

    fn to_pdbtbx(self) -> Format {
        match self {
            StructureFormat::Pdb => Format::Pdb,
            StructureFormat::Mmcif => Format::Mmcif,
        }
    }
}

/// One-letter code for a residue name. Covers the standard amino acids,
/// common modified residues, and DNA/RNA nucleotides.
pub fn three_to_one(res_name: &str) -> Option<char> {
    let code = match res_name.trim().to_ascii_uppercase().as_str() {
        "ALA" => 'A',
        "ARG" => 'R',
        "ASN" => 'N',
        "ASP" => 'D',
        "CYS" => 'C',
        "GLN" => 'Q',
        "GLU" => 'E',
        "GLY" => 'G',
        "HIS" | "HID" | "HIE" | "HIP" => 'H',
        "ILE" => 'I',
        "LEU" => 'L',
        "LYS" => 'K',
        "MET" | "MSE" => 'M',
        "PHE" => 'F',
        "PRO" => 'P',
        "SER" => 'S',
        "THR" => 'T',
        "TRP" => 'W',
        "TYR" => 'Y',
        "VAL" => 'V',
        "SEC" => 'U',
        "PYL" => 'O',
        "DA" | "A" => 'A',
        "DC" | "C" => 'C',
        "DG" | "G" => 'G',
        "DT" => 'T',
        "DU" | "U" => 'U',
        _ => return None,
    };
    Some(code)
}

/// Parse coordinate text and return one Cα trace per chain, in file order.
///
/// Residues are keyed by chain, serial number and insertion code; only the
/// first Cα seen for a key is kept, which drops alternate locations and
/// repeated models. Non-carbon atoms named `CA` (calcium ions) are ignored.
/// Unknown residue names become `X`.
pub fn parse_chains(text: &str, format: StructureFormat) -> Result<Vec<ChainTrace>, StructureError> {
    let reader = BufReader::new(text.as_bytes());

    let (pdb, _errors) = ReadOptions::new()
        .set_format(format.to_pdbtbx())
        .set_level(StrictnessLevel::Loose)
        .read_raw(reader)
        .map_err(|errs| {
            StructureError::Parse(
                errs.iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    let mut traces: Vec<ChainTrace> = Vec::new();
    let mut seen: HashSet<(String, isize, String)> = HashSet::new();

    for hier in pdb.atoms_with_hierarchy() {
        let atom = hier.atom();
        if atom.name().trim() != "CA" {
            continue;
        }
        let is_carbon = atom
            .element()
            .map_or(true, |e| e.symbol().eq_ignore_ascii_case("C"));
        if !is_carbon {
            continue;
        }

        let chain_id = hier.chain().id().to_string();
        let residue = hier.residue();
        let key = (
            chain_id.clone(),
            residue.serial_number(),
            residue.insertion_code().unwrap_or("").to_string(),
        );
        if !seen.insert(key) {
            continue;
        }

        let code = three_to_one(hier.conformer().name()).unwrap_or('X');
        let position = Vec3::new(atom.x() as f32, atom.y() as f32, atom.z() as f32);

        match traces.iter_mut().find(|t| t.chain_id == chain_id) {
            Some(trace) => {
                trace.sequence.push(code);
                trace.ca_positions.push(position);
            }
            None => traces.push(ChainTrace {
                chain_id,
                sequence: code.to_string(),
                ca_positions: vec![position],
            }),
        }
    }

    if traces.is_empty() {
        return Err(StructureError::Empty);
    }
    log::debug!(
        "parsed {} chain(s), {} residues",
        traces.len(),
        traces.iter().map(ChainTrace::len).sum::<usize>()
    );
    Ok(traces)
}

/// Parse with format detection.
pub fn parse_chains_auto(text: &str) -> Result<Vec<ChainTrace>, StructureError> {
    parse_chains(text, StructureFormat::detect(text))
}
