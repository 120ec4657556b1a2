use crate::{error::AppError, AppState};
use analytics::{CityAggregate, CityCount, CuisineCount, InsightsReport, MapView, PriceRatingPoint};
use axum::{
    extract::{Path, State},
    Json,
};
use core_types::Restaurant;
use std::sync::Arc;

/// # GET /api/restaurants
/// The raw restaurant table, in dataset order.
pub async fn get_restaurants(State(state): State<Arc<AppState>>) -> Json<Vec<Restaurant>> {
    Json(state.dataset.restaurants().to_vec())
}

/// # GET /api/cities
/// The valid city selections, in first-seen order.
pub async fn get_cities(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.dataset.cities().into_iter().map(str::to_string).collect())
}

/// # GET /api/city-counts
pub async fn get_city_counts(State(state): State<Arc<AppState>>) -> Json<Vec<CityCount>> {
    Json(state.engine.citywise_counts(&state.dataset))
}

/// # GET /api/cities/:city/statistics
pub async fn get_city_statistics(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CityAggregate>, AppError> {
    let stats = state.engine.city_statistics(&state.dataset, &city)?;
    Ok(Json(stats))
}

/// # GET /api/cuisines
pub async fn get_cuisines(State(state): State<Arc<AppState>>) -> Json<Vec<CuisineCount>> {
    Json(state.engine.global_cuisine_frequency(&state.dataset))
}

/// # GET /api/price-rating
pub async fn get_price_rating(State(state): State<Arc<AppState>>) -> Json<Vec<PriceRatingPoint>> {
    Json(state.engine.price_rating_pairs(&state.dataset))
}

/// # GET /api/map
pub async fn get_map(State(state): State<Arc<AppState>>) -> Json<MapView> {
    Json(
        state
            .engine
            .map_view(&state.dataset, state.map_center, state.map_zoom),
    )
}

/// # GET /api/insights
pub async fn get_insights(State(state): State<Arc<AppState>>) -> Json<InsightsReport> {
    Json(state.engine.insights(&state.dataset, state.top_cities))
}
