//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PRECIS_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PRECIS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Sentence-transformer directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// When unset the embedder runs in stub mode.
    pub embedder_path: Option<PathBuf>,

    /// Chat model used to generate the reference summary. Default: `gpt-4o-mini`.
    pub summary_model: String,

    /// Use the local extractive summarizer instead of calling a provider.
    pub mock_provider: bool,

    /// LanguageTool base URL. When unset the rule-based checker is used.
    pub grammar_url: Option<String>,

    /// LanguageTool language code. Default: `en-US`.
    pub grammar_language: String,

    /// LanguageTool request timeout. Default: 10s.
    pub grammar_timeout: Duration,
}

/// Default summary model used when `PRECIS_SUMMARY_MODEL` is not set.
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini";

/// Default LanguageTool language.
pub const DEFAULT_GRAMMAR_LANGUAGE: &str = "en-US";

/// Default LanguageTool timeout in seconds.
pub const DEFAULT_GRAMMAR_TIMEOUT_SECS: u64 = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            embedder_path: None,
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            mock_provider: false,
            grammar_url: None,
            grammar_language: DEFAULT_GRAMMAR_LANGUAGE.to_string(),
            grammar_timeout: Duration::from_secs(DEFAULT_GRAMMAR_TIMEOUT_SECS),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PRECIS_PORT";
    const ENV_BIND_ADDR: &'static str = "PRECIS_BIND_ADDR";
    const ENV_EMBEDDER_PATH: &'static str = "PRECIS_EMBEDDER_PATH";
    const ENV_SUMMARY_MODEL: &'static str = "PRECIS_SUMMARY_MODEL";
    const ENV_MOCK_PROVIDER: &'static str = "PRECIS_MOCK_PROVIDER";
    const ENV_GRAMMAR_URL: &'static str = "PRECIS_GRAMMAR_URL";
    const ENV_GRAMMAR_LANGUAGE: &'static str = "PRECIS_GRAMMAR_LANGUAGE";
    const ENV_GRAMMAR_TIMEOUT_SECS: &'static str = "PRECIS_GRAMMAR_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let embedder_path =
            Self::parse_optional_string_from_env(Self::ENV_EMBEDDER_PATH).map(PathBuf::from);
        let summary_model =
            Self::parse_string_from_env(Self::ENV_SUMMARY_MODEL, defaults.summary_model);
        let mock_provider = Self::parse_flag_from_env(Self::ENV_MOCK_PROVIDER);
        let grammar_url = Self::parse_optional_string_from_env(Self::ENV_GRAMMAR_URL);
        let grammar_language =
            Self::parse_string_from_env(Self::ENV_GRAMMAR_LANGUAGE, defaults.grammar_language);
        let grammar_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_GRAMMAR_TIMEOUT_SECS,
            defaults.grammar_timeout.as_secs(),
        ));

        Ok(Self {
            port,
            bind_addr,
            embedder_path,
            summary_model,
            mock_provider,
            grammar_url,
            grammar_language,
            grammar_timeout,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.embedder_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref url) = self.grammar_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidUrl { value: url.clone() });
        }

        if self.summary_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_SUMMARY_MODEL,
            });
        }

        if self.grammar_timeout.is_zero() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_GRAMMAR_TIMEOUT_SECS,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }

    fn parse_flag_from_env(var_name: &str) -> bool {
        env::var_os(var_name).is_some_and(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}
