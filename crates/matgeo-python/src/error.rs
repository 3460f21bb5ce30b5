//! Mapping from library errors to Python exceptions

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(matgeo, MatgeoError, PyValueError);

/// Trait for converting errors to PyErr
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for matgeo_algos::AlgoError {
    fn into_py_err(self) -> PyErr {
        log::debug!("raising MatgeoError: {self}");
        MatgeoError::new_err(self.to_string())
    }
}

/// Extension trait to convert Result<T, E> where E: IntoPyErr
pub trait ResultExt<T> {
    fn map_py_err(self) -> PyResult<T>;
}

impl<T, E: IntoPyErr> ResultExt<T> for Result<T, E> {
    fn map_py_err(self) -> PyResult<T> {
        self.map_err(|e| e.into_py_err())
    }
}
