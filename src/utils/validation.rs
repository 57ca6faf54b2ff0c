use crate::utils::error::{ChatError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ChatError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ChatError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 確認 `${VAR}` 已被環境變數替換
pub fn validate_substituted(field_name: &str, value: &str) -> Result<()> {
    if is_unresolved_placeholder(value) {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Environment variable placeholder was not resolved".to_string(),
        });
    }
    Ok(())
}

pub fn is_unresolved_placeholder(value: &str) -> bool {
    value.contains("${") && value.contains('}')
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ChatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("store.base_url", "https://firestore.googleapis.com").is_ok());
        assert!(validate_url("store.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("store.base_url", "").is_err());
        assert!(validate_url("store.base_url", "invalid-url").is_err());
        assert!(validate_url("store.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_substituted() {
        assert!(validate_substituted("store.project_id", "car-listing-website").is_ok());
        assert!(validate_substituted("store.project_id", "${FIRESTORE_PROJECT_ID}").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("chat.max_results", 2, 1, 50).is_ok());
        assert!(validate_range("chat.max_results", 0, 1, 50).is_err());
        assert!(validate_range("chat.max_results", 51, 1, 50).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("./listings.json".to_string());
        assert_eq!(
            validate_required_field("store.listings_path", &present).unwrap(),
            "./listings.json"
        );

        let missing: Option<String> = None;
        assert!(validate_required_field("store.listings_path", &missing).is_err());
    }
}
