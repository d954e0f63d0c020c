//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `emsdash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use emsdash_domain::viewer::Viewer;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dashboard asset settings.
    pub dashboard: DashboardConfig,
    /// Account the API serves requests as.
    pub viewer: ViewerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated bus settings.
    pub gateway: GatewayConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the compiled dashboard (`index.html`, wasm bundle).
    pub assets_dir: String,
}

/// Viewer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub username: String,
    /// Whether the viewer may send write commands.
    pub admin: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Virtual gateway configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Time a device scan takes to discover new devices, in milliseconds.
    pub scan_delay_ms: u64,
}

impl Config {
    /// Load configuration from `emsdash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("emsdash.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("EMSDASH_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("EMSDASH_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("EMSDASH_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("EMSDASH_ASSETS") {
            self.dashboard.assets_dir = val;
        }
        if let Some(admin) = var("EMSDASH_ADMIN").and_then(|val| val.parse().ok()) {
            self.viewer.admin = admin;
        }
        if let Some(val) = var("EMSDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.viewer.username.trim().is_empty() {
            return Err(ConfigError::Validation(
                "viewer username must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the account every request is served as.
    #[must_use]
    pub fn viewer(&self) -> Viewer {
        Viewer {
            username: self.viewer.username.clone(),
            admin: self.viewer.admin,
        }
    }

    /// Return the simulated scan duration.
    #[must_use]
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.gateway.scan_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assets_dir: "dist".to_string(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            admin: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "emsdashd=info,emsdash=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            scan_delay_ms: 2000,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.assets_dir, "dist");
        assert_eq!(config.viewer.username, "admin");
        assert!(config.viewer.admin);
        assert_eq!(config.scan_delay(), Duration::from_secs(2));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [dashboard]
            assets_dir = '/srv/emsdash'

            [viewer]
            username = 'guest'
            admin = false

            [logging]
            filter = 'debug'

            [gateway]
            scan_delay_ms = 500
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.dashboard.assets_dir, "/srv/emsdash");
        assert_eq!(
            config.viewer(),
            Viewer {
                username: "guest".to_string(),
                admin: false
            }
        );
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.scan_delay(), Duration::from_millis(500));
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [viewer]
            admin = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.viewer.admin);
        assert_eq!(config.viewer.username, "admin");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_blank_username() {
        let mut config = Config::default();
        config.viewer.username = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_override_from_environment() {
        let config = overridden(&[
            ("EMSDASH_HOST", "127.0.0.1"),
            ("EMSDASH_PORT", "8080"),
            ("EMSDASH_ASSETS", "/srv/www"),
            ("EMSDASH_ADMIN", "false"),
            ("EMSDASH_LOG", "warn"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.dashboard.assets_dir, "/srv/www");
        assert!(!config.viewer.admin);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = overridden(&[
            ("EMSDASH_HOST", "127.0.0.1"),
            ("EMSDASH_PORT", "8080"),
            ("EMSDASH_BIND", "10.0.0.2:4000"),
        ]);
        assert_eq!(config.bind_addr(), "10.0.0.2:4000");
    }

    #[test]
    fn should_prefer_rust_log_over_emsdash_log() {
        let config = overridden(&[("EMSDASH_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_overrides() {
        let config = overridden(&[("EMSDASH_PORT", "http"), ("EMSDASH_ADMIN", "yes")]);
        assert_eq!(config.server.port, 3000);
        assert!(config.viewer.admin);
    }
}
