use serde::{Deserialize, Serialize};

const CONFIG_PATH_ENV: &str = "GATEHOUSE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "gatehouse.toml";

/// App configuration, read from a TOML file at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the identity server
    pub auth_server_url: String,
    /// Destination path handed to the federated provider as callback
    pub signed_in_path: String,
    /// Federated provider offered on the credential forms
    pub social_provider: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_server_url: "http://localhost:3000".to_string(),
            signed_in_path: "/dashboard".to_string(),
            social_provider: "google".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config file, falling back to defaults.
    ///
    /// A missing file is normal (first run); a malformed one is logged and
    /// ignored so a bad edit never prevents the app from starting.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&path, &contents),
            Err(_) => {
                log::debug!("no config file at {}, using defaults", path);
                Self::default()
            }
        }
    }

    fn parse(path: &str, contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed config {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.auth_server_url, "http://localhost:3000");
        assert_eq!(config.signed_in_path, "/dashboard");
        assert_eq!(config.social_provider, "google");
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = AppConfig::parse(
            "test.toml",
            "auth_server_url = \"https://id.example.com\"\n",
        );
        assert_eq!(config.auth_server_url, "https://id.example.com");
        assert_eq!(config.signed_in_path, "/dashboard");
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let config = AppConfig::parse("test.toml", "auth_server_url = [nonsense");
        assert_eq!(config, AppConfig::default());
    }
}
