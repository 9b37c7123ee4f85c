//! Argument conversion for the FFI boundary
//!
//! Turns Python positional arguments into core `Bounds` and core errors into
//! Python exceptions.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::error::RngError;
use crate::rng::Bounds;

impl From<RngError> for PyErr {
    fn from(err: RngError) -> Self {
        if err.is_type_error() {
            PyTypeError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Reject more than two positional bounds before any conversion
fn check_arg_count(args: &Bound<'_, PyTuple>) -> PyResult<()> {
    if args.len() > 2 {
        return Err(RngError::InvalidArgumentCount { count: args.len() }.into());
    }
    Ok(())
}

/// Parse `*bounds` for an integer draw
///
/// # Errors
/// - ValueError for more than two arguments
/// - TypeError if any argument is not a 32-bit unsigned integer
pub fn parse_int_bounds(args: &Bound<'_, PyTuple>) -> PyResult<Bounds<u32>> {
    check_arg_count(args)?;

    let values = args
        .iter()
        .map(|arg| {
            arg.extract::<u32>().map_err(|_| {
                PyErr::from(RngError::InvalidBoundType(
                    "Range must be a 32 bit unsigned integer".to_string(),
                ))
            })
        })
        .collect::<PyResult<Vec<u32>>>()?;

    Ok(Bounds::from_args(&values)?)
}

/// Parse `*bounds` for a float draw
///
/// # Errors
/// - ValueError for more than two arguments
/// - TypeError if any argument is not a number
pub fn parse_float_bounds(args: &Bound<'_, PyTuple>) -> PyResult<Bounds<f64>> {
    check_arg_count(args)?;

    let values = args
        .iter()
        .map(|arg| {
            arg.extract::<f64>().map_err(|_| {
                PyErr::from(RngError::InvalidBoundType("Range must be a number".to_string()))
            })
        })
        .collect::<PyResult<Vec<f64>>>()?;

    Ok(Bounds::from_args(&values)?)
}

/// Seed argument: a single integer or a list of integers
pub enum SeedArg {
    Scalar(u32),
    Sequence(Vec<u32>),
}

/// Parse a seed value
///
/// # Errors
/// TypeError if the value is neither a u32 nor a sequence of u32.
pub fn parse_seed(value: &Bound<'_, PyAny>) -> PyResult<SeedArg> {
    if let Ok(scalar) = value.extract::<u32>() {
        return Ok(SeedArg::Scalar(scalar));
    }
    value.extract::<Vec<u32>>().map(SeedArg::Sequence).map_err(|_| {
        PyErr::from(RngError::InvalidBoundType(
            "Seed must be a 32 bit unsigned integer or a list of them".to_string(),
        ))
    })
}
