//! Domain Layer
//!
//! Pure bundling logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Source files read during a build
//! - `value_objects/` - Immutable value types (patterns, target, metadata, hash)
//! - `services/` - Header rendering and concatenation
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
