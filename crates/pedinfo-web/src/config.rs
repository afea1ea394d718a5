//! Configuration loading for the pedinfo web server.
//! Reads pedinfo.toml from the path given by `--config` / PEDINFO_CONFIG,
//! falling back to ./pedinfo.toml and then to built-in defaults.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pedinfo_common::error::{PedinfoError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "pedinfo.toml";

/// Command-line flags. Values given here override the config file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pedinfo-web", about = "Childhood infectious disease reference service")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PEDINFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host()       -> String  { "127.0.0.1".to_string() }
fn default_port()       -> u16     { 8000 }
fn default_static_dir() -> PathBuf { Path::new(env!("CARGO_MANIFEST_DIR")).join("static") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "pedinfo_web=debug,pedinfo_catalog=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    /// Load configuration.
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PedinfoError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PedinfoError::Config(e.to_string()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.static_dir.ends_with("static"));
        assert!(config.logging.filter.contains("pedinfo_web"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[server]\nport = 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.filter, default_log_filter());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(matches!(err, PedinfoError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/pedinfo.toml"))).unwrap_err();
        assert!(matches!(err, PedinfoError::Config(ref m) if m.contains("not found")));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let cli = Cli::try_parse_from(["pedinfo-web", "--host", "0.0.0.0", "--port", "3001"]).unwrap();
        let config = Config::from_toml_str("[server]\nhost = \"10.0.0.1\"\nport = 9090\n")
            .unwrap()
            .with_overrides(&cli);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
    }
}
