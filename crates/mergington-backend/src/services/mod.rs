//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstractions and implementations
//! for the activity directory. Currently includes an in-memory implementation
//! seeded at startup; its contents are lost when the process exits.

pub mod activities;

pub use activities::*;
