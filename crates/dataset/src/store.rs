use crate::error::DatasetError;
use crate::sample::sample_restaurants;
use core_types::Restaurant;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The ordered, read-only restaurant table.
///
/// There is no way to add, change or remove a record once the
/// dataset is built; queries borrow it and derive everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDataset {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDataset {
    /// Builds a dataset, validating every record in order.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, DatasetError> {
        for (index, restaurant) in restaurants.iter().enumerate() {
            restaurant
                .validate()
                .map_err(|source| DatasetError::InvalidRecord { index, source })?;
        }
        Ok(Self { restaurants })
    }

    /// The built-in eleven-restaurant sample.
    pub fn sample() -> Self {
        Self {
            restaurants: sample_restaurants(),
        }
    }

    /// Reads a JSON array of restaurant records.
    ///
    /// An empty array is rejected: a dashboard with nothing to show is a
    /// configuration mistake rather than a valid dataset.
    pub fn from_json_file(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let restaurants: Vec<Restaurant> = serde_json::from_str(&content)?;
        if restaurants.is_empty() {
            return Err(DatasetError::Empty);
        }
        Self::new(restaurants)
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Distinct city names in the order they first appear.
    ///
    /// These are the only values a presentation layer should offer as a city
    /// selection.
    pub fn cities(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.restaurants
            .iter()
            .map(|r| r.city.as_str())
            .filter(|city| seen.insert(*city))
            .collect()
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.restaurants.iter().any(|r| r.city == city)
    }
}

impl<'a> IntoIterator for &'a RestaurantDataset {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn restaurant(name: &str, city: &str) -> Restaurant {
        Restaurant::new(name, 10.0, 10.0, city, 4.0, "Thai", 2).unwrap()
    }

    #[test]
    fn cities_are_distinct_in_first_seen_order() {
        let dataset = RestaurantDataset::new(vec![
            restaurant("a", "Rome"),
            restaurant("b", "Tokyo"),
            restaurant("c", "Rome"),
            restaurant("d", "Lima"),
        ])
        .unwrap();

        assert_eq!(dataset.cities(), vec!["Rome", "Tokyo", "Lima"]);
        assert!(dataset.contains_city("Lima"));
        assert!(!dataset.contains_city("lima"));
    }

    #[test]
    fn new_reports_the_offending_record() {
        let mut bad = restaurant("b", "Tokyo");
        bad.rating = 7.5;
        let err = RestaurantDataset::new(vec![restaurant("a", "Rome"), bad]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn sample_has_eleven_cities() {
        let dataset = RestaurantDataset::sample();
        assert_eq!(dataset.len(), 11);
        assert_eq!(dataset.cities().len(), 11);
        assert_eq!(dataset.cities()[0], "Bangalore");
    }

    #[test]
    fn loads_records_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Thai Orchid","latitude":13.7563,"longitude":100.5018,
                "city":"Bangkok","rating":4.4,"cuisine":"Thai","price_range":3}}]"#
        )
        .unwrap();

        let dataset = RestaurantDataset::from_json_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.restaurants()[0].city, "Bangkok");
    }

    #[test]
    fn bundled_json_matches_the_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/restaurants.json");
        let dataset = RestaurantDataset::from_json_file(&path).unwrap();
        let sample = RestaurantDataset::sample();

        assert_eq!(dataset.len(), sample.len());
        for (loaded, expected) in dataset.iter().zip(sample.iter()) {
            assert_eq!(loaded.name, expected.name);
            assert_eq!(loaded.city, expected.city);
            assert_eq!(loaded.cuisine, expected.cuisine);
            assert_eq!(loaded.price_range, expected.price_range);
            assert!((loaded.rating - expected.rating).abs() < 1e-9);
            assert!((loaded.latitude - expected.latitude).abs() < 1e-9);
            assert!((loaded.longitude - expected.longitude).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_empty_and_malformed_files() {
        let mut empty = NamedTempFile::new().unwrap();
        write!(empty, "[]").unwrap();
        assert!(matches!(
            RestaurantDataset::from_json_file(empty.path()),
            Err(DatasetError::Empty)
        ));

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "{{not json").unwrap();
        assert!(matches!(
            RestaurantDataset::from_json_file(garbage.path()),
            Err(DatasetError::Json(_))
        ));

        assert!(matches!(
            RestaurantDataset::from_json_file(Path::new("/nonexistent/restaurants.json")),
            Err(DatasetError::Io { .. })
        ));
    }
}
