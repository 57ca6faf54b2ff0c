//! Keyword-based preference extraction.
//!
//! Each category is scanned independently with plain substring matching;
//! the first vocabulary entry found wins. Extraction never fails: a message
//! with no recognizable keyword yields empty [`Preferences`].

use crate::domain::model::Preferences;
use regex::Regex;
use std::sync::OnceLock;

pub const FUEL_TYPES: &[&str] = &["electric", "gasoline", "petrol", "hybrid"];
pub const BRANDS: &[&str] = &[
    "BMW",
    "Mercedes-Benz",
    "Toyota",
    "Nissan",
    "Lamborghini",
    "Hyundai",
];
pub const CAR_TYPES: &[&str] = &["SUV", "Sedan", "Truck", "Convertible"];
pub const COLORS: &[&str] = &["black", "white", "red", "blue", "green", "silver", "gray"];

static PRICE_PATTERN: OnceLock<Regex> = OnceLock::new();

// 可選的 $，一段必要數字，再接一段可選（千分位）數字。只認 ASCII 數字
fn price_pattern() -> &'static Regex {
    PRICE_PATTERN.get_or_init(|| Regex::new(r"\$?([0-9]+),?([0-9]+)?").unwrap())
}

pub fn extract_preferences(input: &str) -> Preferences {
    let lowered = input.to_lowercase();

    let preferences = Preferences {
        fuel: first_match(&lowered, FUEL_TYPES),
        price: extract_price(input),
        brand: first_match(&lowered, BRANDS),
        car_type: first_match(&lowered, CAR_TYPES),
        color: first_match(&lowered, COLORS),
    };

    tracing::debug!(?preferences, "extracted preferences");
    preferences
}

/// Returns the vocabulary spelling of the first entry contained in
/// `lowered`.
fn first_match(lowered: &str, vocabulary: &[&str]) -> Option<String> {
    vocabulary
        .iter()
        .find(|word| lowered.contains(&word.to_lowercase()))
        .map(|word| word.to_string())
}

/// 價格上限：兩段數字直接串接後解析。
///
/// `"$15,000"` 得到 15000，`"12000"` 得到 12000，`"$1,5"` 會得到 15。
pub fn extract_price(input: &str) -> Option<u64> {
    let caps = price_pattern().captures(input)?;
    let head = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let tail = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let digits = format!("{}{}", head, tail);

    match digits.parse::<u64>() {
        Ok(price) => Some(price),
        Err(e) => {
            tracing::debug!("ignoring price '{}': {}", digits, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_yields_empty_preferences() {
        let prefs = extract_preferences("Hello there, can you help me find something nice?");
        assert!(prefs.is_empty());
        assert!(extract_preferences("").is_empty());
    }

    #[test]
    fn test_full_sentence() {
        let prefs = extract_preferences("I want a red Toyota SUV under $15,000");

        assert_eq!(prefs.fuel, None);
        assert_eq!(prefs.price, Some(15000));
        assert_eq!(prefs.brand.as_deref(), Some("Toyota"));
        assert_eq!(prefs.car_type.as_deref(), Some("SUV"));
        assert_eq!(prefs.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_vocabulary_spelling_is_kept() {
        let prefs = extract_preferences("electric BMW sedan");

        assert_eq!(prefs.fuel.as_deref(), Some("electric"));
        assert_eq!(prefs.brand.as_deref(), Some("BMW"));
        assert_eq!(prefs.car_type.as_deref(), Some("Sedan"));
        assert_eq!(prefs.price, None);
        assert_eq!(prefs.color, None);
    }

    #[test]
    fn test_vocabulary_order_breaks_ties() {
        // hybrid 出現在前，但 gasoline 在字彙表中排前面
        let prefs = extract_preferences("hybrid or gasoline, black or white");
        assert_eq!(prefs.fuel.as_deref(), Some("gasoline"));
        assert_eq!(prefs.color.as_deref(), Some("black"));

        let prefs = extract_preferences("a hyundai or a bmw");
        assert_eq!(prefs.brand.as_deref(), Some("BMW"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let prefs = extract_preferences("MERCEDES-BENZ CONVERTIBLE in SILVER, PETROL please");
        assert_eq!(prefs.brand.as_deref(), Some("Mercedes-Benz"));
        assert_eq!(prefs.car_type.as_deref(), Some("Convertible"));
        assert_eq!(prefs.color.as_deref(), Some("silver"));
        assert_eq!(prefs.fuel.as_deref(), Some("petrol"));
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        let prefs = extract_preferences("show me suvs, the shredded ones");
        assert_eq!(prefs.car_type.as_deref(), Some("SUV"));
        assert_eq!(prefs.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_price_formats() {
        assert_eq!(extract_price("under $15,000"), Some(15000));
        assert_eq!(extract_price("budget 12000"), Some(12000));
        assert_eq!(extract_price("$30000 max"), Some(30000));
        assert_eq!(extract_price("no numbers here"), None);
    }

    #[test]
    fn test_price_concatenates_malformed_split() {
        assert_eq!(extract_price("$1,5"), Some(15));
        assert_eq!(extract_price("$1,234,567"), Some(1234));
    }

    #[test]
    fn test_first_number_wins() {
        // 年份也會被當成價格
        assert_eq!(extract_price("a 2019 Nissan for $9,000"), Some(2019));
    }

    #[test]
    fn test_non_ascii_digits_are_not_prices() {
        assert_eq!(extract_price("car #٣ under $15,000"), Some(15000));
        assert_eq!(extract_price("budget ١٢٠٠٠"), None);
    }

    #[test]
    fn test_oversized_price_is_dropped() {
        let prefs = extract_preferences("red car for $99999999999999999999999");
        assert_eq!(prefs.price, None);
        assert_eq!(prefs.color.as_deref(), Some("red"));
    }
}
