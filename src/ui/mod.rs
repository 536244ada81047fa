//! Terminal output for the greedy-build binary
//!
//! All user-facing text goes through here; the library never prints.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
