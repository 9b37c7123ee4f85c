//! Deterministic random number generation
//!
//! MT19937 Mersenne Twister with bounded integer and float draws.
//! CRITICAL: a `Generator` is one stream. It is never cloned implicitly.

mod mt19937;
mod range;
mod shared;

pub use mt19937::{Generator, DEFAULT_SEED, STATE_SIZE};
pub use range::Bounds;
pub use shared::SharedGenerator;
