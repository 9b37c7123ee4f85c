//! MTRand Core - Rust Engine
//!
//! Deterministic MT19937 Mersenne Twister with bounded integer and float
//! draws, plus an optional Python binding.
//!
//! # Architecture
//!
//! - **rng**: Generator state, seeding, twist, tempering and range mapping
//! - **entropy**: Seed acquisition from the host
//! - **config**: Serializable seeding configuration
//! - **checkpoint**: Snapshot and restore of a stream position
//! - **sampling**: Random strings, weighted choice, shuffling
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence, matching reference MT19937 vectors
//! 2. The state block is regenerated exactly once per 624 draws
//! 3. Rejected calls never advance the stream
//!
//! Not a cryptographic generator.

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod entropy;
pub mod error;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use checkpoint::{compute_hash, validate_snapshot, GeneratorSnapshot};
pub use config::{GeneratorConfig, SeedConfig};
pub use entropy::{EntropySource, FixedEntropy, SystemEntropy};
pub use error::RngError;
pub use rng::{Bounds, Generator, SharedGenerator, DEFAULT_SEED, STATE_SIZE};
pub use sampling::DEFAULT_CHARSET;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mtrand_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Seed the shared generator at import, as the module functions expect
    ffi::generator::module_generator();

    m.add_class::<ffi::generator::PyMersenneTwister>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::rand, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::generator::rand_int, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::generator::seed, m)?)?;
    Ok(())
}
