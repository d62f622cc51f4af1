//! Host-application configuration for the feed pipeline.
//!
//! The config file is optional — a missing file yields `Config::default()`,
//! which matches the preference defaults of the original settings screen.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields`
//! off), though we log a warning when the file contains potential typos.
//!
//! The core treats every value here as an opaque string to interpolate into
//! the request URL; nothing is validated locally, and out-of-range values
//! surface as remote 4xx/5xx responses.
use crate::feed::FeedRequest;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted before the config file's `api_key`.
const API_KEY_ENV: &str = "GUARDIAN_API_KEY";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Feed query configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
///
/// Custom Debug impl masks `api_key` to prevent secret leakage in logs,
/// error messages, and debug output.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed section key (e.g. "technology"). Empty means the unsectioned
    /// root feed.
    pub section: String,

    /// Result ordering requested from the API.
    pub order_by: String,

    /// Results per request, as an opaque string.
    pub page_size: String,

    /// Free-text search keyword. Empty means no keyword filter.
    pub keyword: String,

    /// Guardian API key (alternative to the GUARDIAN_API_KEY env var).
    /// Env var takes precedence over config file.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section: String::new(),
            order_by: "newest".to_string(),
            page_size: "10".to_string(),
            keyword: String::new(),
            api_key: None,
        }
    }
}

/// Mask api_key in Debug output to prevent secret leakage.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("section", &self.section)
            .field("order_by", &self.order_by)
            .field("page_size", &self.page_size)
            .field("keyword", &self.keyword)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading so a corrupted or hostile file
        // cannot exhaust memory.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {} // Size is within limits, proceed
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["section", "order_by", "page_size", "keyword", "api_key"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), section = %config.section, "Loaded configuration");
        Ok(config)
    }

    /// Resolve the API key: the GUARDIAN_API_KEY env var wins over the
    /// config file value. Absent everywhere means the request is sent with
    /// an empty key and the server rejects it.
    pub fn resolved_api_key(&self) -> Option<SecretString> {
        std::env::var(API_KEY_ENV)
            .ok()
            .or_else(|| self.api_key.clone())
            .map(SecretString::from)
    }

    /// Build a fresh [`FeedRequest`] from this configuration. Called once
    /// per invocation; the request is never cached.
    pub fn feed_request(&self) -> FeedRequest {
        FeedRequest {
            section: if self.section.is_empty() {
                None
            } else {
                Some(self.section.clone())
            },
            page_size: self.page_size.clone(),
            order_by: self.order_by.clone(),
            keyword: self.keyword.clone(),
            api_key: self
                .resolved_api_key()
                .unwrap_or_else(|| SecretString::from(String::new())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.section, "");
        assert_eq!(config.order_by, "newest");
        assert_eq!(config.page_size, "10");
        assert_eq!(config.keyword, "");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/byline_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.order_by, "newest");
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("byline_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_size, "10");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let dir = std::env::temp_dir().join("byline_config_test_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "section = \"technology\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.section, "technology");
        assert_eq!(config.order_by, "newest"); // default
        assert_eq!(config.page_size, "10"); // default

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("byline_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = r#"
section = "science"
order_by = "relevance"
page_size = "25"
keyword = "rust"
api_key = "test-key-123"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.section, "science");
        assert_eq!(config.order_by, "relevance");
        assert_eq!(config.page_size, "25");
        assert_eq!(config.keyword, "rust");
        assert_eq!(config.api_key.as_deref(), Some("test-key-123"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("byline_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("byline_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = r#"
section = "technology"
totally_fake_key = "should not fail"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.section, "technology");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let dir = std::env::temp_dir().join("byline_config_test_wrongtype");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        // page_size is an opaque string, not an integer
        std::fs::write(&path, "page_size = 10\n").unwrap();

        let result = Config::load(&path);
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("byline_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        // Write a file just over 1MB
        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::TooLarge(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_debug_masks_api_key() {
        let mut config = Config::default();
        config.api_key = Some("super-secret-key-12345".to_string());

        let debug_output = format!("{:?}", config);
        assert!(
            !debug_output.contains("super-secret-key-12345"),
            "Debug output should not contain the API key"
        );
        assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output should show [REDACTED] for API key"
        );
    }

    #[test]
    fn test_feed_request_maps_empty_section_to_none() {
        let config = Config::default();
        let request = config.feed_request();
        assert_eq!(request.section, None);

        let mut config = Config::default();
        config.section = "technology".to_string();
        let request = config.feed_request();
        assert_eq!(request.section.as_deref(), Some("technology"));
    }
}
