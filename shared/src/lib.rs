//! Shared types for Mesa
//!
//! Persisted documents and API payloads used by the server, its tests and
//! any Rust client talking to the REST API.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
