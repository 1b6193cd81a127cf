use serde::Deserialize;

use crate::error::AppError;

/// Environment variable holding the Gemini credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key; checked lazily so the server can still start and report it
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Gemini model identifier
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The API key, treating a blank value as absent
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error raised whenever an analysis is attempted without a credential
pub fn missing_api_key() -> AppError {
    AppError::Configuration(format!(
        "{} environment variable is missing. Add it to the server environment \
         (or a .env file next to the binary) and restart the service.",
        API_KEY_VAR
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> Config {
        Config {
            gemini_api_key: key.map(str::to_string),
            gemini_api_url: default_gemini_api_url(),
            gemini_model: default_gemini_model(),
            host: default_host(),
            port: default_port(),
        }
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        assert_eq!(config_with_key(Some("   ")).api_key(), None);
        assert_eq!(config_with_key(None).api_key(), None);
        assert_eq!(config_with_key(Some("abc")).api_key(), Some("abc"));
    }

    #[test]
    fn test_envy_defaults() {
        let vars = vec![("GEMINI_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-3-pro-preview");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = missing_api_key();
        assert!(err.user_message().contains(API_KEY_VAR));
    }
}
