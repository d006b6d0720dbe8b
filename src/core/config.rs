use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub occupancy: OccupancyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub unix_socket: Option<PathBuf>,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub spreadsheet_id: String,
    pub api_key: String,
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between roster refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyConfig {
    #[serde(default = "default_top_groups")]
    pub default_top_groups: usize,
    #[serde(default = "default_max_top_groups")]
    pub max_top_groups: usize,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            default_top_groups: default_top_groups(),
            max_top_groups: default_max_top_groups(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_range() -> String {
    "Sheet1!A:J".to_string()
}

fn default_base_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_timeout() -> u64 {
    30
}

fn default_top_groups() -> usize {
    5
}

fn default_max_top_groups() -> usize {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port.is_none() && self.server.unix_socket.is_none() {
            bail!("Either port or unix_socket must be specified in server config");
        }

        if self.server.port == Some(0) {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.source.spreadsheet_id.is_empty() {
            bail!("spreadsheet_id must not be empty");
        }

        if self.source.api_key.is_empty() {
            bail!("source api_key must not be empty");
        }

        if self.source.refresh_interval == 0 {
            bail!("refresh_interval must be greater than 0");
        }

        if self.source.timeout == 0 {
            bail!("timeout must be greater than 0");
        }

        if self.admin.api_key.is_empty() {
            bail!("admin api_key must not be empty");
        }

        if self.occupancy.default_top_groups == 0 {
            bail!("default_top_groups must be greater than 0");
        }

        if self.occupancy.default_top_groups > self.occupancy.max_top_groups {
            bail!(
                "default_top_groups ({}) must not exceed max_top_groups ({})",
                self.occupancy.default_top_groups,
                self.occupancy.max_top_groups
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
        [server]
        port = 8080

        [source]
        spreadsheet_id = "sheet-123"
        api_key = "sheets-key"

        [admin]
        api_key = "admin-key"

        [logging]
    "#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = Config::from_toml(MINIMAL).expect("Failed to parse config");

        assert_eq!(config.server.port, Some(8080));
        assert!(config.server.num_threads > 0);
        assert_eq!(config.source.range, "Sheet1!A:J");
        assert_eq!(config.source.refresh_interval, 30);
        assert_eq!(config.occupancy.default_top_groups, 5);
        assert_eq!(config.occupancy.max_top_groups, 50);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(!config.logging.console);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = Config::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.admin.api_key, "admin-key");
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/seatwatch.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_listener() {
        let toml = MINIMAL.replace("port = 8080", "");
        assert!(Config::from_toml(&toml).is_err());
    }

    #[test]
    fn test_rejects_zero_refresh_interval() {
        let toml = MINIMAL.replace(
            "api_key = \"sheets-key\"",
            "api_key = \"sheets-key\"\nrefresh_interval = 0",
        );
        assert!(Config::from_toml(&toml).is_err());
    }

    #[test]
    fn test_rejects_default_above_max() {
        let toml = format!(
            "{}\n[occupancy]\ndefault_top_groups = 10\nmax_top_groups = 3\n",
            MINIMAL
        );
        let err = Config::from_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let toml = MINIMAL.replace("[logging]", "[logging]\nlevel = \"loud\"");
        assert!(Config::from_toml(&toml).is_err());
    }
}
