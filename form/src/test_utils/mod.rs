//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks record every call so tests can assert on what reached the
//! record store and the presentation layer.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
