//! The shared library for Mergington, the extracurricular activities API of Mergington High School.
//!
//! This library provides the wire data structures, error types and logging setup
//! used by the backend and by anything that talks to it.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
