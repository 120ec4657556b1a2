use core_types::Restaurant;

/// (name, latitude, longitude, city, rating, cuisine, price_range)
type Row = (&'static str, f64, f64, &'static str, f64, &'static str, u8);

const SAMPLE_ROWS: [Row; 11] = [
    ("Taste of India", 12.9716, 77.5946, "Bangalore", 4.5, "Indian", 2),
    ("Beijing Bites", 39.9042, 116.4074, "Beijing", 4.2, "Chinese", 3),
    ("Mumbai Spice", 19.0760, 72.8777, "Mumbai", 4.0, "Indian", 2),
    ("Chennai Delight", 13.0827, 80.2707, "Chennai", 4.7, "South Indian", 2),
    ("Punjabi Dhaba", 31.6340, 74.8723, "Amritsar", 4.3, "North Indian", 1),
    ("Italian Feast", 41.9028, 12.4964, "Rome", 4.6, "Italian", 3),
    ("Thai Orchid", 13.7563, 100.5018, "Bangkok", 4.4, "Thai", 3),
    ("Sushi Haven", 35.6895, 139.6917, "Tokyo", 4.8, "Japanese", 4),
    ("Burger Junction", 40.7128, -74.0060, "New York", 4.1, "American", 2),
    ("Cafe Latte", 51.5074, -0.1278, "London", 4.0, "Cafe", 2),
    ("Mediterranean Grill", 36.1627, -86.7816, "Nashville", 4.5, "Mediterranean", 3),
];

/// The built-in sample of eleven restaurants, in display order.
pub fn sample_restaurants() -> Vec<Restaurant> {
    SAMPLE_ROWS
        .iter()
        .map(
            |&(name, latitude, longitude, city, rating, cuisine, price_range)| Restaurant {
                name: name.to_string(),
                latitude,
                longitude,
                city: city.to_string(),
                rating,
                cuisine: cuisine.to_string(),
                price_range,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_record_is_valid() {
        for restaurant in sample_restaurants() {
            assert!(restaurant.validate().is_ok(), "{} is invalid", restaurant.name);
        }
    }

    #[test]
    fn sample_keeps_display_order() {
        let names: Vec<String> = sample_restaurants().into_iter().map(|r| r.name).collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names.first().map(String::as_str), Some("Taste of India"));
        assert_eq!(names.last().map(String::as_str), Some("Mediterranean Grill"));
    }
}
