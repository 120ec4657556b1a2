use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_PRICE_RANGE: u8 = 1;
pub const MAX_PRICE_RANGE: u8 = 4;

/// A single restaurant as shown on the map and fed into the analytics.
///
/// Records are only built through [`Restaurant::new`] (or checked with
/// [`Restaurant::validate`] after deserialization), so every instance that
/// reaches the analytics layer satisfies the bounds below:
///
/// * `latitude` in `[-90, 90]`, `longitude` in `[-180, 180]`
/// * `rating` in `[0, 5]`
/// * `price_range` in `[1, 4]`
/// * `name`, `city` and `cuisine` are non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub rating: f64,
    pub cuisine: String,
    pub price_range: u8,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        city: impl Into<String>,
        rating: f64,
        cuisine: impl Into<String>,
        price_range: u8,
    ) -> Result<Self, CoreError> {
        let restaurant = Self {
            name: name.into(),
            latitude,
            longitude,
            city: city.into(),
            rating,
            cuisine: cuisine.into(),
            price_range,
        };
        restaurant.validate()?;
        Ok(restaurant)
    }

    /// Checks every field against the record's bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("city", &self.city)?;
        require_non_empty("cuisine", &self.cuisine)?;

        require_in_range("latitude", self.latitude, -90.0, 90.0)?;
        require_in_range("longitude", self.longitude, -180.0, 180.0)?;
        require_in_range("rating", self.rating, MIN_RATING, MAX_RATING)?;

        if !(MIN_PRICE_RANGE..=MAX_PRICE_RANGE).contains(&self.price_range) {
            return Err(CoreError::InvalidInput(
                "price_range".to_string(),
                format!(
                    "{} is outside [{}, {}]",
                    self.price_range, MIN_PRICE_RANGE, MAX_PRICE_RANGE
                ),
            ));
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            field.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(())
}

// NaN fails the range check as well.
fn require_in_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::InvalidInput(
            field.to_string(),
            format!("{} is outside [{}, {}]", value, min, max),
        ));
    }
    Ok(())
}
