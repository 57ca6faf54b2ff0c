use crate::core::ConfigProvider;
use crate::utils::error::{ChatError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Firestore,
    File,
}

impl FromStr for StoreBackend {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "file" => Ok(StoreBackend::File),
            other => Err(ChatError::InvalidConfigValueError {
                field: "store.backend".to_string(),
                value: other.to_string(),
                reason: "Valid backends: firestore, file".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub listings_path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Firestore,
            project_id: String::new(),
            database: "(default)".to_string(),
            collection: "cars".to_string(),
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            access_token: None,
            timeout_seconds: None,
            listings_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub max_results: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_results: crate::core::recommender::DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ChatError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: compact, json".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChatError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ChatError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIRESTORE_ACCESS_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChatError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 只從環境變數建立配置（`.env` 需先由 [`load_dotenv`] 載入）
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 以任意查詢函式取代 process 環境變數，方便測試
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT")? {
            config.server.port = port;
        }
        if let Some(backend) = parse_var(&lookup, "STORE_BACKEND")? {
            config.store.backend = backend;
        }
        if let Some(project_id) = lookup("FIRESTORE_PROJECT_ID") {
            config.store.project_id = project_id;
        }
        if let Some(database) = lookup("FIRESTORE_DATABASE") {
            config.store.database = database;
        }
        if let Some(collection) = lookup("FIRESTORE_COLLECTION") {
            config.store.collection = collection;
        }
        if let Some(base_url) = lookup("FIRESTORE_BASE_URL") {
            config.store.base_url = base_url;
        } else if let Some(emulator) = lookup("FIRESTORE_EMULATOR_HOST") {
            config.store.base_url = format!("http://{}", emulator);
        }
        config.store.access_token = lookup("FIRESTORE_ACCESS_TOKEN");
        config.store.timeout_seconds = parse_var(&lookup, "FIRESTORE_TIMEOUT_SECONDS")?;
        config.store.listings_path = lookup("LISTINGS_PATH");
        if let Some(max_results) = parse_var(&lookup, "CHAT_MAX_RESULTS")? {
            config.chat.max_results = max_results;
        }
        if let Some(format) = parse_var(&lookup, "LOG_FORMAT")? {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validation::validate_range("chat.max_results", self.chat.max_results, 1, 50)?;

        let store = &self.store;
        match store.backend {
            StoreBackend::Firestore => {
                validation::validate_non_empty_string("store.project_id", &store.project_id)?;
                validation::validate_substituted("store.project_id", &store.project_id)?;
                validation::validate_non_empty_string("store.database", &store.database)?;
                validation::validate_non_empty_string("store.collection", &store.collection)?;
                validation::validate_url("store.base_url", &store.base_url)?;
                if let Some(timeout) = store.timeout_seconds {
                    validation::validate_range("store.timeout_seconds", timeout, 1, 300)?;
                }
                if store.access_token.is_some() && ConfigProvider::access_token(store).is_none() {
                    tracing::warn!("⚠️ store.access_token is blank or unresolved, sending requests without it");
                }
            }
            StoreBackend::File => {
                let path =
                    validation::validate_required_field("store.listings_path", &store.listings_path)?;
                validation::validate_path("store.listings_path", path)?;
            }
        }

        Ok(())
    }
}

/// 載入 `.env` 到 process 環境，已存在的變數不會被覆蓋。
///
/// `path` 為 `None` 時從目前目錄往上尋找，找不到不算錯誤；
/// 明確指定的檔案不存在或格式錯誤則回傳錯誤。
pub fn load_dotenv(path: Option<&Path>) -> Result<()> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    match loaded {
        Ok(()) => Ok(()),
        Err(e) if path.is_none() && e.not_found() => Ok(()),
        Err(e) => Err(ChatError::ConfigError {
            message: format!("Failed to load .env file: {}", e),
        }),
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ChatError::InvalidConfigValueError {
                field: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

impl ConfigProvider for StoreConfig {
    fn store_base_url(&self) -> &str {
        &self.base_url
    }

    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn database_id(&self) -> &str {
        &self.database
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty() && !validation::is_unresolved_placeholder(token))
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
