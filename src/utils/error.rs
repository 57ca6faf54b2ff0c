use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Store request failed: {0}")]
    StoreRequestError(#[from] reqwest::Error),

    #[error("Store query failed: {message}")]
    QueryError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ChatError {
    /// 存儲層失敗（連線、權限、後端錯誤）
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            ChatError::StoreRequestError(_) | ChatError::QueryError { .. }
        )
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ChatError::StoreRequestError(_) | ChatError::QueryError { .. } => {
                "The listing store could not be reached".to_string()
            }
            ChatError::IoError(e) => format!("Could not read a required file: {}", e),
            ChatError::SerializationError(e) => format!("Malformed JSON data: {}", e),
            ChatError::ConfigError { message } => format!("Configuration problem: {}", message),
            ChatError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            ChatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ChatError::ConfigValidationError { field, message } => {
                format!("Setting '{}' could not be parsed: {}", field, message)
            }
            ChatError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChatError::StoreRequestError(_) | ChatError::QueryError { .. } => {
                "Check the store base_url, project_id and access token, then retry"
            }
            ChatError::IoError(_) => "Make sure the file exists and is readable",
            ChatError::SerializationError(_) => {
                "Listings files must contain a JSON array of objects"
            }
            ChatError::ConfigError { .. }
            | ChatError::MissingConfigError { .. }
            | ChatError::InvalidConfigValueError { .. }
            | ChatError::ConfigValidationError { .. } => {
                "Fix the TOML file or environment variables and restart"
            }
            ChatError::ValidationError { .. } => {
                "Send a JSON body of the form {\"message\": \"...\"}"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
