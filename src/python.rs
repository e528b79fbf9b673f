//! Python bindings for geometry generation and structure analysis.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adapters::pdb;
use crate::analysis;
use crate::geometry::{self, DoubleHelixParams, RibbonParams};
use crate::types::Geometry;

fn geometry_to_dict(py: Python, geom: &Geometry) -> PyResult<Py<PyAny>> {
    let positions: Vec<Vec<f32>> = geom
        .points
        .iter()
        .map(|p| vec![p.position.x, p.position.y, p.position.z])
        .collect();
    let kinds: Vec<String> = geom.points.iter().map(|p| format!("{:?}", p.kind)).collect();
    let indices: Vec<u32> = geom.points.iter().map(|p| p.index).collect();
    let residues: Vec<Option<String>> = geom
        .points
        .iter()
        .map(|p| p.residue.map(|c| c.to_string()))
        .collect();
    let elements: Vec<Option<&'static str>> = geom
        .points
        .iter()
        .map(|p| p.element.map(|e| e.symbol()))
        .collect();
    let colors: Vec<Vec<f32>> = geom.points.iter().map(|p| p.color.to_vec()).collect();
    let segments: Vec<(u32, u32)> = geom.segments.iter().map(|s| (s.start, s.end)).collect();
    let segment_kinds: Vec<String> = geom
        .segments
        .iter()
        .map(|s| format!("{:?}", s.kind))
        .collect();

    let dict = PyDict::new(py);
    dict.set_item("positions", positions)?;
    dict.set_item("kinds", kinds)?;
    dict.set_item("indices", indices)?;
    dict.set_item("residues", residues)?;
    dict.set_item("elements", elements)?;
    dict.set_item("colors", colors)?;
    dict.set_item("segments", segments)?;
    dict.set_item("segment_kinds", segment_kinds)?;

    Ok(dict.unbind().into_any())
}

#[pyfunction]
#[pyo3(signature = (turns=2, points_per_turn=20, radius=1.5, height=8.0, label=String::new()))]
pub fn double_helix(
    py: Python,
    turns: u32,
    points_per_turn: u32,
    radius: f32,
    height: f32,
    label: String,
) -> PyResult<Py<PyAny>> {
    let params = DoubleHelixParams {
        label,
        turns,
        points_per_turn,
        radius,
        height,
    };
    geometry_to_dict(py, &geometry::generate_double_helix(&params))
}

/// Ribbon for `sequence`; pass `seed` for reproducible side chains.
#[pyfunction]
#[pyo3(signature = (sequence=None, seed=None))]
pub fn ribbon(py: Python, sequence: Option<String>, seed: Option<u64>) -> PyResult<Py<PyAny>> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let geom = geometry::generate_ribbon(sequence.as_deref(), &RibbonParams::default(), &mut rng);
    geometry_to_dict(py, &geom)
}

/// Analyze a metadata JSON bundle; returns the analysis as JSON.
#[pyfunction]
pub fn analyze_json(json: String) -> PyResult<String> {
    serde_json::to_string(&analysis::analyze_json(&json))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// `(chain_id, sequence)` pairs from PDB or mmCIF text.
#[pyfunction]
pub fn structure_sequences(text: String) -> PyResult<Vec<(String, String)>> {
    let traces = pdb::parse_chains_auto(&text)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
    Ok(traces.into_iter().map(|t| (t.chain_id, t.sequence)).collect())
}
