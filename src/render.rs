//! Terminal rendering of the derived views.

use analytics::{CityAggregate, CityCount, CuisineCount, InsightsReport, MapMarker, PriceRatingPoint};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use core_types::Restaurant;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn restaurants_table(restaurants: &[Restaurant]) -> Table {
    let mut table = new_table(&[
        "Name",
        "Latitude",
        "Longitude",
        "City",
        "Rating",
        "Cuisine",
        "Price Range",
    ]);
    for r in restaurants {
        table.add_row(vec![
            Cell::new(&r.name),
            Cell::new(format!("{:.4}", r.latitude)),
            Cell::new(format!("{:.4}", r.longitude)),
            Cell::new(&r.city),
            Cell::new(format!("{:.1}", r.rating)),
            Cell::new(&r.cuisine),
            Cell::new(r.price_range),
        ]);
    }
    table
}

pub fn city_counts_table(counts: &[CityCount]) -> Table {
    let mut table = new_table(&["City", "Number of Restaurants"]);
    for c in counts {
        table.add_row(vec![Cell::new(&c.city), Cell::new(c.count)]);
    }
    table
}

pub fn cities_table(cities: &[&str]) -> Table {
    let mut table = new_table(&["City"]);
    for city in cities {
        table.add_row(vec![Cell::new(city)]);
    }
    table
}

pub fn cuisine_table(cuisines: &[CuisineCount]) -> Table {
    let mut table = new_table(&["Cuisine", "Count"]);
    for c in cuisines {
        table.add_row(vec![Cell::new(&c.cuisine), Cell::new(c.count)]);
    }
    table
}

pub fn price_rating_table(points: &[PriceRatingPoint]) -> Table {
    let mut table = new_table(&["Price Range", "Rating", "City"]);
    for p in points {
        table.add_row(vec![
            Cell::new(p.price_range),
            Cell::new(format!("{:.1}", p.rating)),
            Cell::new(&p.city),
        ]);
    }
    table
}

pub fn markers_table(markers: &[MapMarker]) -> Table {
    let mut table = new_table(&[
        "Name",
        "Cuisine",
        "City",
        "Restaurants in City",
        "Latitude",
        "Longitude",
    ]);
    for m in markers {
        table.add_row(vec![
            Cell::new(&m.name),
            Cell::new(&m.cuisine),
            Cell::new(&m.city),
            Cell::new(m.city_restaurant_count),
            Cell::new(format!("{:.4}", m.latitude)),
            Cell::new(format!("{:.4}", m.longitude)),
        ]);
    }
    table
}

/// Summary lines and cuisine table for one city.
pub fn city_statistics_text(stats: &CityAggregate) -> String {
    format!(
        "Restaurants in {city}: {count}\n\
         Average Rating in {city}: {rating:.2}\n\
         Average Price Range in {city}: {price:.2}\n\
         Most Common Cuisines:\n{table}",
        city = stats.city,
        count = stats.count,
        rating = stats.average_rating,
        price = stats.average_price_range,
        table = cuisine_table(&stats.cuisine_frequency),
    )
}

pub fn insights_text(insights: &InsightsReport) -> String {
    let correlation = match insights.price_rating_correlation {
        Some(r) => format!("{r:.2}"),
        None => "undefined".to_string(),
    };
    format!(
        "1. Cities with the highest number of restaurants:\n{}\n\
         2. Correlation between price range and ratings: {}\n\
         3. Popular cuisines across all cities:\n{}",
        city_counts_table(&insights.top_cities),
        correlation,
        cuisine_table(&insights.popular_cuisines),
    )
}
