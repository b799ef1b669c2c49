//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration tests: sample profile documents,
//! telephone numbers and account numbers.

pub mod fixtures;

pub use fixtures::*;
