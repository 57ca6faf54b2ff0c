use crate::config::toml_config::{load_dotenv, AppConfig, LogFormat};
use crate::utils::error::Result;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "car-chatbot")]
#[command(about = "Car recommendation chatbot HTTP service")]
pub struct CliConfig {
    /// Path to TOML configuration file (environment variables are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// .env file to load before reading configuration (defaults to ./.env if present)
    #[arg(long)]
    pub env_file: Option<String>,

    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入配置並套用命令列覆蓋設定
    pub fn load(&self) -> Result<AppConfig> {
        // 兩種來源都需要 .env：TOML 的 ${VAR} 替換也會讀到
        load_dotenv(self.env_file.as_deref().map(Path::new))?;

        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::from_env()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.log_json {
            config.logging.format = LogFormat::Json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::StoreBackend;
    use crate::utils::error::ChatError;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "car-chatbot",
            "--config",
            "car-chatbot.toml",
            "--port",
            "8088",
            "-v",
            "--log-json",
        ]);

        assert_eq!(cli.config.as_deref(), Some("car-chatbot.toml"));
        assert_eq!(cli.port, Some(8088));
        assert!(cli.verbose);
        assert!(cli.log_json);
        assert_eq!(cli.host, None);
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let cli = CliConfig::parse_from(["car-chatbot", "--host", "127.0.0.1", "-p", "7000"]);
        let mut config = AppConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.server.bind_addr(), "127.0.0.1:7000");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_config_file_placeholders_see_dotenv_values() {
        let mut env_file = NamedTempFile::new().unwrap();
        writeln!(env_file, "CAR_CHATBOT_CLI_TEST_PROJECT=from-dotenv").unwrap();
        writeln!(env_file, "CAR_CHATBOT_CLI_TEST_TOKEN=ya29.dotenv").unwrap();

        let mut config_file = NamedTempFile::new().unwrap();
        config_file
            .write_all(
                br#"
[store]
backend = "firestore"
project_id = "${CAR_CHATBOT_CLI_TEST_PROJECT}"
access_token = "${CAR_CHATBOT_CLI_TEST_TOKEN}"
"#,
            )
            .unwrap();

        let cli = CliConfig::parse_from([
            "car-chatbot",
            "--config",
            config_file.path().to_str().unwrap(),
            "--env-file",
            env_file.path().to_str().unwrap(),
        ]);
        let config = cli.load().unwrap();

        assert_eq!(config.store.backend, StoreBackend::Firestore);
        assert_eq!(config.store.project_id, "from-dotenv");
        assert_eq!(config.store.access_token.as_deref(), Some("ya29.dotenv"));
        assert!(config.validate().is_ok());

        std::env::remove_var("CAR_CHATBOT_CLI_TEST_PROJECT");
        std::env::remove_var("CAR_CHATBOT_CLI_TEST_TOKEN");
    }

    #[test]
    fn test_missing_env_file_fails_to_load() {
        let cli = CliConfig::parse_from([
            "car-chatbot",
            "--config",
            "car-chatbot.example.toml",
            "--env-file",
            "/definitely/not/here/.env",
        ]);

        assert!(matches!(cli.load().unwrap_err(), ChatError::ConfigError { .. }));
    }
}
