//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Ints, floats, lists and strings at the boundary
//! 3. **Validate inputs**: Argument count and types are checked here, before
//!    the core is called
//! 4. **Safe errors**: Core errors become Python exceptions, never panics

pub mod generator;
pub mod types;
