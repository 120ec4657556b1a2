//! # Restaurant Atlas Dataset Crate
//!
//! Owns the restaurant table that every query runs against. It is the system's
//! only source of data.
//!
//! ## Architectural Principles
//!
//! - **Immutable After Load:** A `RestaurantDataset` has no mutating methods. Once
//!   built it is shared behind an `Arc` and read concurrently without locks.
//! - **Load Once:** `DatasetCache` memoizes the loaded dataset for the lifetime of
//!   the process. It is constructed explicitly by the application and passed to
//!   whoever needs it; there is no global instance.
//! - **Validated Records:** Every record is checked against the `Restaurant`
//!   bounds before it enters a dataset, whatever its source.
//!
//! ## Public API
//!
//! - `RestaurantDataset`: the ordered, read-only table.
//! - `DatasetSource`: where a dataset comes from (built-in sample or JSON file).
//! - `DatasetCache`: the load-once memo.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod cache;
pub mod error;
pub mod sample;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use cache::{DatasetCache, DatasetSource};
pub use error::DatasetError;
pub use store::RestaurantDataset;
