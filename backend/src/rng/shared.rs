//! Thread-safe handle to a single generator stream
//!
//! Every call takes the lock once and runs to completion under it, so
//! concurrent callers observe whole draws only.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{Bounds, Generator};
use crate::error::RngError;

/// Cloneable handle sharing one [`Generator`] between threads
///
/// Cloning the handle shares the stream; it does not fork it.
///
/// # Example
/// ```
/// use mtrand_core_rs::{Generator, SharedGenerator};
///
/// let shared = SharedGenerator::new(Generator::with_seed(5489));
/// let handle = shared.clone();
/// std::thread::spawn(move || handle.next_uint32()).join().unwrap();
/// assert_eq!(shared.with(|rng| rng.regeneration_count()), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SharedGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl SharedGenerator {
    pub fn new(generator: Generator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Run `f` with exclusive access to the generator
    ///
    /// Use this to make several draws atomically.
    pub fn with<R>(&self, f: impl FnOnce(&mut Generator) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    pub fn seed_scalar(&self, seed: u32) {
        self.lock().seed_scalar(seed);
    }

    pub fn seed_sequence(&self, seeds: &[u32]) -> Result<(), RngError> {
        self.lock().seed_sequence(seeds)
    }

    pub fn next_uint32(&self) -> u32 {
        self.lock().next_uint32()
    }

    pub fn next_int(&self, bounds: Bounds<u32>) -> Result<u32, RngError> {
        self.lock().next_int(bounds)
    }

    pub fn next_float(&self, bounds: Bounds<f64>) -> Result<f64, RngError> {
        self.lock().next_float(bounds)
    }

    fn lock(&self) -> MutexGuard<'_, Generator> {
        // Generator methods never panic mid-update, so a poisoned lock still
        // guards a consistent state
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Generator> for SharedGenerator {
    fn from(generator: Generator) -> Self {
        Self::new(generator)
    }
}
