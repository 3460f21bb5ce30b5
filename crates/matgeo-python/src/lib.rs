//! Python bindings for matgeo-algos
//!
//! Exposes the exercise routines under the same names the original shared
//! library exported, so Python drivers can call them directly.

use pyo3::prelude::*;
use pyo3::types::PyModule;

mod error;
mod linalg;

pub use error::MatgeoError;

/// Python module initialization
#[pymodule]
fn _matgeo(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let _ = env_logger::try_init();

    m.add("MatgeoError", py.get_type_bound::<error::MatgeoError>())?;

    linalg::register_module(m)?;

    m.add("TOLERANCE", matgeo_algos::TOLERANCE)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
