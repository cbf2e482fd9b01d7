//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data and raw claim payloads
//! - `builders`: Builder patterns for claim document construction
//! - `assertions`: Custom assertion helpers for routing decisions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
