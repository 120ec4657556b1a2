use crate::error::AnalyticsError;
use crate::frequency::FrequencyTable;
use crate::report::{
    CityAggregate, CityCount, CuisineCount, InsightsReport, MapCenter, MapMarker, MapView,
    PriceRatingPoint,
};
use core_types::Restaurant;
use dataset::RestaurantDataset;
use tracing::{debug, warn};

/// A stateless calculator for deriving aggregate views from the restaurant table.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restaurants per city, most restaurants first.
    ///
    /// Cities with the same count keep the order in which they first appear in
    /// the dataset.
    pub fn citywise_counts(&self, dataset: &RestaurantDataset) -> Vec<CityCount> {
        let table = city_table(dataset);
        debug_assert_eq!(table.total(), dataset.len());
        let counts = table
            .into_ranked()
            .into_iter()
            .map(|(city, count)| CityCount {
                city: city.to_string(),
                count,
            })
            .collect::<Vec<_>>();

        debug!(cities = counts.len(), "Computed citywise counts");
        counts
    }

    /// Count, average rating, average price range and cuisine frequency for
    /// one city.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The restaurant table.
    /// * `city` - The selected city. Matched exactly (case-sensitive).
    ///
    /// # Returns
    ///
    /// The `CityAggregate`, or `AnalyticsError::NotFound` if no restaurant is in
    /// `city`.
    pub fn city_statistics(
        &self,
        dataset: &RestaurantDataset,
        city: &str,
    ) -> Result<CityAggregate, AnalyticsError> {
        let restaurants: Vec<&Restaurant> = dataset.iter().filter(|r| r.city == city).collect();

        if restaurants.is_empty() {
            warn!(city, "Requested statistics for an unknown city");
            return Err(AnalyticsError::NotFound(city.to_string()));
        }

        let ratings: Vec<f64> = restaurants.iter().map(|r| r.rating).collect();
        let prices: Vec<f64> = restaurants.iter().map(|r| f64::from(r.price_range)).collect();

        let aggregate = CityAggregate {
            city: city.to_string(),
            count: restaurants.len(),
            average_rating: mean(&ratings, "average rating")?,
            average_price_range: mean(&prices, "average price range")?,
            cuisine_frequency: cuisine_frequency(restaurants.iter().copied()),
        };

        debug!(city, count = aggregate.count, "Computed city statistics");
        Ok(aggregate)
    }

    /// Cuisine popularity across every city.
    pub fn global_cuisine_frequency(&self, dataset: &RestaurantDataset) -> Vec<CuisineCount> {
        cuisine_frequency(dataset.iter())
    }

    /// One `(price_range, rating, city)` point per restaurant, in dataset order.
    pub fn price_rating_pairs(&self, dataset: &RestaurantDataset) -> Vec<PriceRatingPoint> {
        dataset
            .iter()
            .map(|r| PriceRatingPoint {
                price_range: r.price_range,
                rating: r.rating,
                city: r.city.clone(),
            })
            .collect()
    }

    /// The `n` cities with the most restaurants.
    pub fn top_cities(&self, dataset: &RestaurantDataset, n: usize) -> Vec<CityCount> {
        let mut counts = self.citywise_counts(dataset);
        counts.truncate(n);
        counts
    }

    /// Pearson correlation between price range and rating over all restaurants.
    pub fn price_rating_correlation(&self, dataset: &RestaurantDataset) -> Option<f64> {
        let prices: Vec<f64> = dataset.iter().map(|r| f64::from(r.price_range)).collect();
        let ratings: Vec<f64> = dataset.iter().map(|r| r.rating).collect();
        pearson(&prices, &ratings)
    }

    /// One marker per restaurant, in dataset order.
    pub fn map_markers(&self, dataset: &RestaurantDataset) -> Vec<MapMarker> {
        let cities = city_table(dataset);
        debug_assert_eq!(cities.total(), dataset.len());

        dataset
            .iter()
            .map(|r| {
                let city_restaurant_count = cities.count(&r.city);
                MapMarker {
                    name: r.name.clone(),
                    cuisine: r.cuisine.clone(),
                    city: r.city.clone(),
                    latitude: r.latitude,
                    longitude: r.longitude,
                    city_restaurant_count,
                    tooltip: r.name.clone(),
                    popup: format!(
                        "{} - {}<br>City: {}<br>Number of Restaurants in {}: {}",
                        r.name, r.cuisine, r.city, r.city, city_restaurant_count
                    ),
                }
            })
            .collect()
    }

    /// Markers plus the initial viewport for a map widget.
    pub fn map_view(&self, dataset: &RestaurantDataset, center: MapCenter, zoom: u8) -> MapView {
        MapView {
            center,
            zoom,
            markers: self.map_markers(dataset),
        }
    }

    /// The insights section: top cities, price/rating correlation and the
    /// global cuisine ranking.
    pub fn insights(&self, dataset: &RestaurantDataset, top_n: usize) -> InsightsReport {
        InsightsReport {
            top_cities: self.top_cities(dataset, top_n),
            price_rating_correlation: self.price_rating_correlation(dataset),
            popular_cuisines: self.global_cuisine_frequency(dataset),
            price_rating_pairs: self.price_rating_pairs(dataset),
        }
    }
}

fn city_table(dataset: &RestaurantDataset) -> FrequencyTable<'_> {
    dataset.iter().map(|r| r.city.as_str()).collect()
}

fn cuisine_frequency<'a, I>(restaurants: I) -> Vec<CuisineCount>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .map(|r| r.cuisine.as_str())
        .collect::<FrequencyTable>()
        .into_ranked()
        .into_iter()
        .map(|(cuisine, count)| CuisineCount {
            cuisine: cuisine.to_string(),
            count,
        })
        .collect()
}

fn mean(values: &[f64], metric: &str) -> Result<f64, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::EmptySubset(metric.to_string()));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample Pearson correlation coefficient, `None` when undefined.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = mean(xs, "mean").ok()?;
    let mean_y = mean(ys, "mean").ok()?;

    let (mut covariance, mut variance_x, mut variance_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x <= 0.0 || variance_y <= 0.0 {
        return None;
    }

    let r = covariance / (variance_x * variance_y).sqrt();
    // Guard against rounding pushing the result just outside [-1, 1].
    Some(r.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(city: &str, cuisine: &str, rating: f64, price_range: u8) -> Restaurant {
        Restaurant::new(
            format!("{cuisine} in {city}"),
            0.0,
            0.0,
            city,
            rating,
            cuisine,
            price_range,
        )
        .unwrap()
    }

    fn small_dataset() -> RestaurantDataset {
        RestaurantDataset::new(vec![
            restaurant("Lyon", "French", 4.0, 3),
            restaurant("Pune", "Indian", 3.0, 1),
            restaurant("Pune", "Chinese", 4.0, 2),
            restaurant("Lyon", "Italian", 5.0, 4),
            restaurant("Pune", "Indian", 5.0, 3),
            restaurant("Oslo", "Nordic", 2.5, 4),
        ])
        .unwrap()
    }

    #[test]
    fn citywise_counts_rank_by_count_then_first_seen() {
        let counts = AnalyticsEngine::new().citywise_counts(&small_dataset());
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.city.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Pune", 3), ("Lyon", 2), ("Oslo", 1)]);
    }

    #[test]
    fn citywise_counts_are_idempotent() {
        let engine = AnalyticsEngine::new();
        let dataset = small_dataset();
        assert_eq!(engine.citywise_counts(&dataset), engine.citywise_counts(&dataset));
    }

    #[test]
    fn city_statistics_averages_the_city_subset() {
        let stats = AnalyticsEngine::new()
            .city_statistics(&small_dataset(), "Pune")
            .unwrap();

        assert_eq!(stats.count, 3);
        assert!((stats.average_rating - 4.0).abs() < 1e-9);
        assert!((stats.average_price_range - 2.0).abs() < 1e-9);
        assert_eq!(
            stats.cuisine_frequency,
            vec![
                CuisineCount { cuisine: "Indian".to_string(), count: 2 },
                CuisineCount { cuisine: "Chinese".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn city_statistics_is_case_sensitive() {
        let err = AnalyticsEngine::new()
            .city_statistics(&small_dataset(), "pune")
            .unwrap_err();
        assert_eq!(err, AnalyticsError::NotFound("pune".to_string()));
    }

    #[test]
    fn city_statistics_on_empty_dataset_is_not_found() {
        let empty = RestaurantDataset::new(Vec::new()).unwrap();
        assert!(matches!(
            AnalyticsEngine::new().city_statistics(&empty, "Pune"),
            Err(AnalyticsError::NotFound(_))
        ));
    }

    #[test]
    fn mean_guards_empty_input() {
        assert_eq!(
            mean(&[], "average rating"),
            Err(AnalyticsError::EmptySubset("average rating".to_string()))
        );
    }

    #[test]
    fn global_cuisine_frequency_is_non_increasing() {
        let cuisines = AnalyticsEngine::new().global_cuisine_frequency(&small_dataset());
        assert_eq!(cuisines[0].cuisine, "Indian");
        assert_eq!(cuisines.iter().map(|c| c.count).sum::<usize>(), 6);
        assert!(cuisines.windows(2).all(|w| w[0].count >= w[1].count));
        let order: Vec<&str> = cuisines.iter().skip(1).map(|c| c.cuisine.as_str()).collect();
        assert_eq!(order, vec!["French", "Chinese", "Italian", "Nordic"]);
    }

    #[test]
    fn price_rating_pairs_follow_dataset_order() {
        let dataset = small_dataset();
        let pairs = AnalyticsEngine::new().price_rating_pairs(&dataset);
        assert_eq!(pairs.len(), dataset.len());
        for (pair, restaurant) in pairs.iter().zip(dataset.iter()) {
            assert_eq!(pair.price_range, restaurant.price_range);
            assert_eq!(pair.rating, restaurant.rating);
            assert_eq!(pair.city, restaurant.city);
        }
    }

    #[test]
    fn top_cities_truncates_the_ranking() {
        let engine = AnalyticsEngine::new();
        let dataset = small_dataset();
        assert_eq!(engine.top_cities(&dataset, 2).len(), 2);
        assert_eq!(engine.top_cities(&dataset, 10).len(), 3);
        assert!(engine.top_cities(&dataset, 0).is_empty());
    }

    #[test]
    fn correlation_of_perfectly_linear_data() {
        assert!((pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap() - 1.0).abs() < 1e-9);
        assert!((pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_is_undefined_without_variance_or_points() {
        assert_eq!(pearson(&[2.0, 2.0, 2.0], &[1.0, 4.0, 5.0]), None);
        assert_eq!(pearson(&[1.0], &[4.0]), None);
        assert_eq!(pearson(&[], &[]), None);
    }

    #[test]
    fn map_markers_carry_city_counts() {
        let markers = AnalyticsEngine::new().map_markers(&small_dataset());
        assert_eq!(markers.len(), 6);
        assert_eq!(markers[0].city, "Lyon");
        assert_eq!(markers[0].city_restaurant_count, 2);
        assert_eq!(markers[5].city_restaurant_count, 1);
        assert_eq!(markers[1].tooltip, "Indian in Pune");
        assert_eq!(
            markers[1].popup,
            "Indian in Pune - Indian<br>City: Pune<br>Number of Restaurants in Pune: 3"
        );
    }

    #[test]
    fn insights_bundle_every_view() {
        let engine = AnalyticsEngine::new();
        let dataset = small_dataset();
        let insights = engine.insights(&dataset, 1);
        assert_eq!(insights.top_cities, vec![CityCount { city: "Pune".to_string(), count: 3 }]);
        assert_eq!(insights.popular_cuisines, engine.global_cuisine_frequency(&dataset));
        assert_eq!(insights.price_rating_pairs.len(), dataset.len());
        assert!(insights.price_rating_correlation.is_some());
    }
}
