use analytics::{AnalyticsEngine, MapCenter};
use axum::{routing::get, Router};
use configuration::Settings;
use dataset::RestaurantDataset;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};
// Note: Tracing is initialized by the binary, not here.

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The dataset is the process-wide cached copy; handlers only ever read it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<RestaurantDataset>,
    pub engine: AnalyticsEngine,
    pub map_center: MapCenter,
    pub map_zoom: u8,
    pub top_cities: usize,
}

impl AppState {
    pub fn new(dataset: Arc<RestaurantDataset>, settings: &Settings) -> Self {
        Self {
            dataset,
            engine: AnalyticsEngine::new(),
            map_center: MapCenter {
                latitude: settings.map.center_latitude,
                longitude: settings.map.center_longitude,
            },
            map_zoom: settings.map.zoom,
            top_cities: settings.insights.top_cities,
        }
    }
}

/// Builds the API router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/restaurants", get(handlers::get_restaurants))
        .route("/api/cities", get(handlers::get_cities))
        .route("/api/city-counts", get(handlers::get_city_counts))
        .route("/api/cities/:city/statistics", get(handlers::get_city_statistics))
        .route("/api/cuisines", get(handlers::get_cuisines))
        .route("/api/price-rating", get(handlers::get_price_rating))
        .route("/api/map", get(handlers::get_map))
        .route("/api/insights", get(handlers::get_insights))
        .with_state(Arc::new(state))
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let restaurants = state.dataset.len();
    let app = router(state);

    tracing::info!(restaurants, "Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let dataset = Arc::new(RestaurantDataset::sample());
        router(AppState::new(dataset, &Settings::default()))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, body) = get("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn percent_encoded_city_reaches_the_statistics_handler() {
        let (status, body) = get("/api/cities/New%20York/statistics").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["city"], "New York");
        assert_eq!(json["count"], 1);
        assert_eq!(json["cuisine_frequency"][0]["cuisine"], "American");
    }

    #[tokio::test]
    async fn unknown_city_returns_a_json_error_body() {
        let (status, body) = get("/api/cities/Atlantis/statistics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: Value = serde_json::from_slice(&body).unwrap();
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("Atlantis"), "unexpected error message: {message}");
    }

    #[tokio::test]
    async fn unrouted_path_is_a_plain_404() {
        let (status, _) = get("/api/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
