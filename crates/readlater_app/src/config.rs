use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use readlater_client::ClientSettings;
use readlater_core::WebPreferences;
use readlater_logging::{rl_info, rl_warn};
use serde::Deserialize;
use thiserror::Error;

pub const TOKEN_ENV: &str = "READLATER_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub preferences: WebPreferences,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientSettings::default(),
            preferences: WebPreferences::default(),
            poll_interval_ms: 1000,
            max_polls: 30,
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                rl_warn!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rl_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Applies command line overrides, then the environment token if still unset.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        token: Option<String>,
        env_token: Option<String>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.client.base_url = base_url;
        }
        if let Some(token) = token {
            self.client.auth_token = Some(token);
        }
        if self.client.auth_token.is_none() {
            self.client.auth_token = env_token.filter(|t| !t.is_empty());
        }
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use readlater_core::WebFont;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                client: (base_url: "https://reader.example", request_timeout: 5),
                preferences: (font_family: Lora, text_font_size: 18),
                max_polls: 3,
            )"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.client.base_url, "https://reader.example");
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
        assert_eq!(config.client.graphql_path, "/api/graphql");
        assert_eq!(config.preferences.font_family, WebFont::Lora);
        assert_eq!(config.preferences.text_font_size, 18);
        assert_eq!(config.preferences.line_height, 150);
        assert_eq!(config.max_polls, 3);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(client: oops").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn flag_token_beats_environment() {
        let config = AppConfig::default().with_overrides(
            Some("https://other.example".to_string()),
            Some("flag".to_string()),
            Some("env".to_string()),
        );
        assert_eq!(config.client.base_url, "https://other.example");
        assert_eq!(config.client.auth_token.as_deref(), Some("flag"));

        let config = AppConfig::default().with_overrides(None, None, Some("env".to_string()));
        assert_eq!(config.client.auth_token.as_deref(), Some("env"));

        let config = AppConfig::default().with_overrides(None, None, Some(String::new()));
        assert_eq!(config.client.auth_token, None);
    }
}
