use crate::domain::model::{Listing, ListingQuery, Preferences, BRAND, CAR_TYPE, COLOR, FUEL};

pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, but there was an error processing your request. Please try again later.";
pub const NO_LISTINGS_MESSAGE: &str =
    "I'm sorry, I couldn't find any cars in our database. Please try a different query.";

/// 第一個字元大寫、其餘小寫
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Store query for the categorical preferences. Price is never pushed down.
pub fn build_query(preferences: &Preferences) -> ListingQuery {
    let mut query = ListingQuery::all();

    for (field, value) in [
        (FUEL, &preferences.fuel),
        (BRAND, &preferences.brand),
        (CAR_TYPE, &preferences.car_type),
        (COLOR, &preferences.color),
    ] {
        if let Some(value) = value {
            query = query.with_equal(field, capitalize(value));
        }
    }

    query
}

/// 依價格上限過濾；沒有價格的車以 0 計算，因此一定通過
pub fn filter_by_price<'a>(listings: &'a [Listing], preferences: &Preferences) -> Vec<&'a Listing> {
    match preferences.price {
        Some(ceiling) => listings
            .iter()
            .filter(|car| car.price() <= ceiling as f64)
            .collect(),
        None => listings.iter().collect(),
    }
}

pub fn format_listing(car: &Listing) -> String {
    format!(
        "\n{} {}\nType: {}\nColor: {}\nInterior Color: {}\nTransmission: {}\nEngine: {}\nFuel: {}\nMileage: {}\nPrice: ${}\nVIN: {}\nImage: {}\n",
        car.display_field("brand"),
        car.display_field("name"),
        car.display_field("carType"),
        car.display_field("color"),
        car.display_field("interiorColor"),
        car.display_field("transmission"),
        car.display_field("engine"),
        car.display_field("fuel"),
        car.display_field("mileage"),
        car.display_field("price"),
        car.display_field("VIN"),
        car.display_field("image"),
    )
}

pub fn matches_header(count: usize, max_results: usize) -> String {
    format!(
        "I found {} car(s) matching your preferences. Here are up to {} options:",
        count, max_results
    )
}

pub fn fallback_header(max_results: usize) -> String {
    format!(
        "I couldn't find any cars exactly matching your preferences, but here are up to {} options:",
        max_results
    )
}

pub fn render_response<'a>(header: &str, cars: impl IntoIterator<Item = &'a Listing>) -> String {
    let details: Vec<String> = cars.into_iter().map(format_listing).collect();
    format!("{}\n{}", header, details.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_listing() -> Listing {
        serde_json::from_value(json!({
            "brand": "Toyota",
            "name": "RAV4 XLE",
            "carType": "Suv",
            "color": "Red",
            "interiorColor": "Black",
            "transmission": "Automatic",
            "engine": "2.5L I4",
            "fuel": "Gasoline",
            "mileage": "12,400 mi",
            "price": 14500,
            "VIN": "2T3W1RFV8MW123456",
            "image": "https://cdn.example.com/rav4.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("electric"), "Electric");
        assert_eq!(capitalize("SUV"), "Suv");
        assert_eq!(capitalize("BMW"), "Bmw");
        assert_eq!(capitalize("Mercedes-Benz"), "Mercedes-benz");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_build_query_skips_price() {
        let prefs = Preferences {
            fuel: Some("hybrid".to_string()),
            price: Some(20000),
            brand: Some("Toyota".to_string()),
            car_type: Some("Sedan".to_string()),
            color: Some("silver".to_string()),
        };

        let query = build_query(&prefs);

        assert_eq!(query.filters.len(), 4);
        assert_eq!(query.value_of(FUEL), Some("Hybrid"));
        assert_eq!(query.value_of(BRAND), Some("Toyota"));
        assert_eq!(query.value_of(CAR_TYPE), Some("Sedan"));
        assert_eq!(query.value_of(COLOR), Some("Silver"));
        assert_eq!(query.value_of("price"), None);
    }

    #[test]
    fn test_empty_preferences_build_unfiltered_query() {
        assert!(build_query(&Preferences::default()).is_unfiltered());

        let price_only = Preferences {
            price: Some(5000),
            ..Default::default()
        };
        assert!(build_query(&price_only).is_unfiltered());
    }

    #[test]
    fn test_filter_by_price_is_permissive_for_missing_price() {
        let cars: Vec<Listing> = vec![
            serde_json::from_value(json!({"name": "cheap", "price": 9000})).unwrap(),
            serde_json::from_value(json!({"name": "pricey", "price": 45000})).unwrap(),
            serde_json::from_value(json!({"name": "unknown"})).unwrap(),
            serde_json::from_value(json!({"name": "exact", "price": "10000"})).unwrap(),
        ];
        let prefs = Preferences {
            price: Some(10000),
            ..Default::default()
        };

        let names: Vec<String> = filter_by_price(&cars, &prefs)
            .iter()
            .map(|car| car.display_field("name"))
            .collect();

        assert_eq!(names, vec!["cheap", "unknown", "exact"]);
        assert_eq!(filter_by_price(&cars, &Preferences::default()).len(), 4);
    }

    #[test]
    fn test_format_listing_reproduces_every_field() {
        let rendered = format_listing(&full_listing());

        assert_eq!(
            rendered,
            "\nToyota RAV4 XLE\n\
             Type: Suv\n\
             Color: Red\n\
             Interior Color: Black\n\
             Transmission: Automatic\n\
             Engine: 2.5L I4\n\
             Fuel: Gasoline\n\
             Mileage: 12,400 mi\n\
             Price: $14500\n\
             VIN: 2T3W1RFV8MW123456\n\
             Image: https://cdn.example.com/rav4.jpg\n"
        );
    }

    #[test]
    fn test_format_listing_missing_field_shows_na() {
        let mut car = full_listing();
        car.data.remove("interiorColor");

        let rendered = format_listing(&car);
        let full = format_listing(&full_listing());

        assert!(rendered.contains("\nInterior Color: N/A\n"));
        assert_eq!(
            rendered.replace("Interior Color: N/A", "Interior Color: Black"),
            full
        );
    }

    #[test]
    fn test_missing_price_keeps_dollar_prefix() {
        let car: Listing = serde_json::from_value(json!({"brand": "Nissan"})).unwrap();
        let rendered = format_listing(&car);

        assert!(rendered.starts_with("\nNissan N/A\n"));
        assert!(rendered.contains("\nPrice: $N/A\n"));
    }

    #[test]
    fn test_render_response_joins_records() {
        let car = full_listing();
        let response = render_response(&matches_header(1, 2), [&car]);

        assert!(response.starts_with(
            "I found 1 car(s) matching your preferences. Here are up to 2 options:\n\nToyota RAV4 XLE\n"
        ));
        assert!(response.ends_with("Image: https://cdn.example.com/rav4.jpg\n"));

        let two = render_response(&fallback_header(2), [&car, &car]);
        assert_eq!(two.matches("VIN: 2T3W1RFV8MW123456").count(), 2);
        assert!(two.contains("Image: https://cdn.example.com/rav4.jpg\n\n\nToyota RAV4 XLE"));
    }
}
