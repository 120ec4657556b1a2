//! # Restaurant Atlas Analytics Engine
//!
//! This crate derives every aggregate view the dashboard shows: restaurant
//! counts per city, per-city statistics, cuisine popularity, price/rating pairs
//! and map markers.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no rendering. It depends only on `core-types` and
//!   `dataset`.
//! - **Stateless Calculation:** The `AnalyticsEngine` holds nothing. Each query is a
//!   pure function of a borrowed `RestaurantDataset` (and a selected city), so
//!   results are never cached and repeated calls always agree.
//! - **Deterministic Ordering:** All frequency views are ranked by descending count,
//!   with ties kept in the order the key first appears in the dataset.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the main struct that contains the calculation logic.
//! - `CityAggregate`, `CityCount`, `CuisineCount`, `PriceRatingPoint`, `MapMarker`,
//!   `MapView`, `InsightsReport`: the derived views handed to presentation layers.
//! - `FrequencyTable`: the ordered group-by counter behind the frequency views.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod frequency;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use frequency::FrequencyTable;
pub use report::{
    CityAggregate, CityCount, CuisineCount, InsightsReport, MapCenter, MapMarker, MapView,
    PriceRatingPoint,
};
