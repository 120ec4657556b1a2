//! # Restaurant Atlas Core Types
//!
//! The shared vocabulary of the workspace. Nothing here depends on anything else
//! in the workspace.
//!
//! - `Restaurant`: a single validated, immutable restaurant record.
//! - `CoreError`: returned when a record violates its bounds.

pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use structs::{Restaurant, MAX_PRICE_RANGE, MAX_RATING, MIN_PRICE_RANGE, MIN_RATING};
