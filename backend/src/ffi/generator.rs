//! PyO3 wrapper for the generator
//!
//! Exposes a `MersenneTwister` class plus module-level functions that draw
//! from one shared generator seeded from system entropy at import.

use std::sync::OnceLock;

use pyo3::prelude::*;
use pyo3::types::PyTuple;

use super::types::{parse_float_bounds, parse_int_bounds, parse_seed, SeedArg};
use crate::checkpoint::GeneratorSnapshot;
use crate::entropy::SystemEntropy;
use crate::rng::{Generator, SharedGenerator};

/// Python wrapper for a Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from mtrand_core_rs import MersenneTwister
///
/// rng = MersenneTwister(5489)
/// rng.rand_int()          # 3499211612
/// rng.rand_int(10)        # [0, 10)
/// rng.rand(0.5, 2.0)      # [0.5, 2.0)
/// rng.seed([0x123, 0x234, 0x345, 0x456])
/// ```
#[pyclass(name = "MersenneTwister")]
pub struct PyMersenneTwister {
    inner: Generator,
}

#[pymethods]
impl PyMersenneTwister {
    /// Create a generator
    ///
    /// # Arguments
    ///
    /// * `seed` - int, list of ints, or None for system entropy
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let inner = match seed {
            None => Generator::from_entropy(&SystemEntropy),
            Some(value) => match parse_seed(value)? {
                SeedArg::Scalar(s) => Generator::with_seed(s),
                SeedArg::Sequence(values) => Generator::with_seed_sequence(&values)?,
            },
        };
        Ok(Self { inner })
    }

    /// Reseed from an int or a non-empty list of ints
    fn seed(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        match parse_seed(value)? {
            SeedArg::Scalar(s) => self.inner.seed_scalar(s),
            SeedArg::Sequence(values) => self.inner.seed_sequence(&values)?,
        }
        Ok(())
    }

    /// Float draw: `rand()`, `rand(max)` or `rand(min, max)`
    #[pyo3(signature = (*bounds))]
    fn rand(&mut self, bounds: &Bound<'_, PyTuple>) -> PyResult<f64> {
        let bounds = parse_float_bounds(bounds)?;
        Ok(self.inner.next_float(bounds)?)
    }

    /// Integer draw: `rand_int()`, `rand_int(max)` or `rand_int(min, max)`
    #[pyo3(signature = (*bounds))]
    fn rand_int(&mut self, bounds: &Bound<'_, PyTuple>) -> PyResult<u32> {
        let bounds = parse_int_bounds(bounds)?;
        Ok(self.inner.next_int(bounds)?)
    }

    /// Random string from `charset` (alphanumeric by default)
    #[pyo3(signature = (length, charset=None))]
    fn rand_string(&mut self, length: usize, charset: Option<String>) -> PyResult<String> {
        Ok(self.inner.rand_string(length, charset.as_deref())?)
    }

    /// Weighted index choice; None for an empty list
    fn select_random_index(&mut self, weights: Vec<f64>) -> PyResult<Option<usize>> {
        Ok(self.inner.select_random_index(&weights)?)
    }

    /// Shuffled copy of a list
    fn shuffle(&mut self, py: Python<'_>, items: Vec<PyObject>) -> PyResult<Vec<PyObject>> {
        let positions: Vec<usize> = (0..items.len()).collect();
        Ok(self
            .inner
            .shuffle(&positions)?
            .into_iter()
            .map(|i| items[i].clone_ref(py))
            .collect())
    }

    /// Serialize the stream position as JSON
    fn snapshot(&self) -> PyResult<String> {
        Ok(self.inner.snapshot()?.to_json()?)
    }

    /// Rebuild a generator from `snapshot()` output
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let snapshot = GeneratorSnapshot::from_json(json)?;
        Ok(Self {
            inner: Generator::restore(&snapshot)?,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "MersenneTwister(cursor={}, regenerations={})",
            self.inner.cursor(),
            self.inner.regeneration_count()
        )
    }
}

// ========================================================================
// Module-level functions (shared generator)
// ========================================================================

static MODULE_GENERATOR: OnceLock<SharedGenerator> = OnceLock::new();

/// Generator behind the module-level functions, seeded on first use
pub fn module_generator() -> &'static SharedGenerator {
    MODULE_GENERATOR.get_or_init(|| SharedGenerator::new(Generator::from_entropy(&SystemEntropy)))
}

/// Float draw from the module generator
#[pyfunction]
#[pyo3(signature = (*bounds))]
pub fn rand(bounds: &Bound<'_, PyTuple>) -> PyResult<f64> {
    let bounds = parse_float_bounds(bounds)?;
    Ok(module_generator().next_float(bounds)?)
}

/// Integer draw from the module generator
#[pyfunction]
#[pyo3(signature = (*bounds))]
pub fn rand_int(bounds: &Bound<'_, PyTuple>) -> PyResult<u32> {
    let bounds = parse_int_bounds(bounds)?;
    Ok(module_generator().next_int(bounds)?)
}

/// Reseed the module generator
#[pyfunction]
pub fn seed(value: &Bound<'_, PyAny>) -> PyResult<()> {
    match parse_seed(value)? {
        SeedArg::Scalar(s) => module_generator().seed_scalar(s),
        SeedArg::Sequence(values) => module_generator().seed_sequence(&values)?,
    }
    Ok(())
}
