use serde::{Deserialize, Serialize};

/// Number of restaurants in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Number of restaurants serving one cuisine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: usize,
}

/// Summary statistics for a single city.
///
/// Always derived on demand from the dataset; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAggregate {
    pub city: String,
    pub count: usize,
    pub average_rating: f64,
    pub average_price_range: f64,
    /// Ranked by descending count, ties in first-seen order.
    pub cuisine_frequency: Vec<CuisineCount>,
}

/// One point of the price range vs. rating scatter view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRatingPoint {
    pub price_range: u8,
    pub rating: f64,
    pub city: String,
}

/// A map pin for one restaurant, annotated with its city's restaurant count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub name: String,
    pub cuisine: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city_restaurant_count: usize,
    pub tooltip: String,
    /// HTML snippet for the marker popup.
    pub popup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything a map widget needs to draw the restaurant distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: MapCenter,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// The "insights and patterns" section of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub top_cities: Vec<CityCount>,
    /// Pearson correlation between price range and rating. `None` when it is
    /// undefined (fewer than two restaurants, or no variance on either axis).
    pub price_rating_correlation: Option<f64>,
    pub popular_cuisines: Vec<CuisineCount>,
    pub price_rating_pairs: Vec<PriceRatingPoint>,
}
