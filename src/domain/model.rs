use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FUEL: &str = "fuel";
pub const BRAND: &str = "brand";
pub const CAR_TYPE: &str = "carType";
pub const COLOR: &str = "color";
pub const PRICE: &str = "price";

/// 使用者一則訊息中抽出的購車條件，`None` 代表沒有限制
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "carType", skip_serializing_if = "Option::is_none")]
    pub car_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        self.fuel.is_none()
            && self.price.is_none()
            && self.brand.is_none()
            && self.car_type.is_none()
            && self.color.is_none()
    }
}

/// One vehicle document as returned by the listing store.
///
/// Fields are kept as raw JSON values; only `price` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    pub data: HashMap<String, serde_json::Value>,
}

impl Listing {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    /// 顯示用字串，欄位不存在或為 null 時回傳 "N/A"
    pub fn display_field(&self, name: &str) -> String {
        match self.data.get(name) {
            None | Some(serde_json::Value::Null) => "N/A".to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric price used by the ceiling filter. Missing or unparseable
    /// prices read as 0.
    pub fn price(&self) -> f64 {
        match self.data.get(PRICE) {
            Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// 欄位值是否與條件字串完全相等
    pub fn matches(&self, filter: &FieldFilter) -> bool {
        matches!(
            self.data.get(&filter.field),
            Some(serde_json::Value::String(s)) if *s == filter.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

/// Conjunction of equality predicates. An empty query selects every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub filters: Vec<FieldFilter>,
}

impl ListingQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_equal(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(FieldFilter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.as_str())
    }
}
