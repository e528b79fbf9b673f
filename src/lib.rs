pub mod adapters;
pub mod analysis;
pub mod geometry;
pub mod secondary_structure;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(name = "molsketch")]
fn molsketch(_py: Python, m: &Bound<PyModule>) -> PyResult<()> {
    // Geometry
    m.add_function(wrap_pyfunction!(python::double_helix, m)?)?;
    m.add_function(wrap_pyfunction!(python::ribbon, m)?)?;

    // Analysis
    m.add_function(wrap_pyfunction!(python::analyze_json, m)?)?;

    // Coordinate text
    m.add_function(wrap_pyfunction!(python::structure_sequences, m)?)?;

    Ok(())
}
