//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! account ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data and a service wired to a fixed clock
//! - `builders`: Builder for customers with a prepared statement
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
