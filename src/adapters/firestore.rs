use crate::core::{ConfigProvider, Listing, ListingQuery, ListingStore};
use crate::utils::error::{ChatError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// `ListingStore` backed by the Firestore REST `runQuery` endpoint.
pub struct FirestoreStore<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> FirestoreStore<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:runQuery",
            self.config.store_base_url().trim_end_matches('/'),
            self.config.project_id(),
            self.config.database_id()
        )
    }
}

/// 組出 runQuery 的 structuredQuery 內容
pub fn structured_query(collection: &str, query: &ListingQuery) -> Value {
    let mut filters: Vec<Value> = query
        .filters
        .iter()
        .map(|f| {
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": f.field },
                    "op": "EQUAL",
                    "value": { "stringValue": f.value }
                }
            })
        })
        .collect();

    let mut structured = Map::new();
    structured.insert("from".to_string(), json!([{ "collectionId": collection }]));

    match filters.len() {
        0 => {}
        1 => {
            structured.insert("where".to_string(), filters.remove(0));
        }
        _ => {
            structured.insert(
                "where".to_string(),
                json!({ "compositeFilter": { "op": "AND", "filters": filters } }),
            );
        }
    }

    json!({ "structuredQuery": Value::Object(structured) })
}

/// Converts a Firestore typed value (`{"stringValue": "..."}` etc.) into plain JSON.
pub fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return Value::Null;
    };

    if let Some(s) = obj.get("stringValue") {
        return s.clone();
    }
    if let Some(v) = obj.get("integerValue") {
        // integerValue 以字串傳遞
        return match v {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(s.clone())),
            other => other.clone(),
        };
    }
    if let Some(v) = obj.get("doubleValue") {
        return match v {
            Value::Number(_) => v.clone(),
            _ => Value::Null,
        };
    }
    if let Some(b) = obj.get("booleanValue") {
        return b.clone();
    }
    if obj.contains_key("nullValue") {
        return Value::Null;
    }
    for key in ["timestampValue", "referenceValue", "bytesValue"] {
        if let Some(v) = obj.get(key) {
            return v.clone();
        }
    }
    if let Some(geo) = obj.get("geoPointValue") {
        return geo.clone();
    }
    if let Some(map) = obj.get("mapValue") {
        return Value::Object(decode_fields(map.get("fields")));
    }
    if let Some(array) = obj.get("arrayValue") {
        let values = array
            .get("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }

    Value::Null
}

fn decode_fields(fields: Option<&Value>) -> Map<String, Value> {
    fields
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .map(|(name, value)| (name.clone(), decode_value(value)))
                .collect()
        })
        .unwrap_or_default()
}

/// runQuery 回傳一個陣列，只有帶 `document` 的元素才是結果
pub fn decode_run_query_response(rows: &[Value]) -> Vec<Listing> {
    rows.iter()
        .filter_map(|row| row.get("document"))
        .map(|document| {
            let data: HashMap<String, Value> =
                decode_fields(document.get("fields")).into_iter().collect();
            Listing::new(data)
        })
        .collect()
}

#[async_trait]
impl<C: ConfigProvider> ListingStore for FirestoreStore<C> {
    async fn query(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        let url = self.run_query_url();
        let body = structured_query(self.config.collection(), query);

        tracing::debug!("Making Firestore request to: {}", url);
        let mut request = self.client.post(&url).json(&body);

        if let Some(token) = self.config.access_token() {
            request = request.bearer_auth(token);
        }

        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Firestore response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatError::QueryError {
                message: format!("Firestore returned {}: {}", status, detail.trim()),
            });
        }

        let rows: Vec<Value> = response.json().await?;
        let listings = decode_run_query_response(&rows);
        tracing::debug!("Firestore returned {} listing(s)", listings.len());

        Ok(listings)
    }
}
