//! Common test utilities for greedy-build CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus a runner for the binary
//! - Assertion macros: `assert_exists!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable manifest and source content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
