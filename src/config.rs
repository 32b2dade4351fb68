//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `RECBOX_CONFIG`
//! environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `RECBOX_` override YAML values
//!
//! For nested config values, use double underscores in environment variables. For example,
//! `RECBOX_STORAGE__DIR=/var/lib/recbox` sets the `storage.dir` field.
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use recbox::config::{Args, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let args = Args::parse();
//! let config = Config::load(&args)?;
//!
//! println!("Server will bind to {}:{}", config.host, config.port);
//! # Ok(())
//! # }
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "RECBOX_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// This is the root configuration structure loaded from YAML and environment variables.
/// All fields have sensible defaults defined in the `Default` implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Recording storage configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            storage: StorageConfig::default(),
        }
    }
}

/// Storage configuration for uploaded recordings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Flat directory holding stored recordings. Created at startup if missing.
    /// Relative paths resolve against the process working directory.
    pub dir: PathBuf,
    /// Maximum accepted upload body size in bytes. Oversized requests are
    /// rejected before the upload handler runs.
    pub max_upload_bytes: u64,
    /// File extensions accepted from upload clients (matched case-insensitively)
    pub allowed_extensions: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("myRecordings"),
            max_upload_bytes: 300 * 1024 * 1024, // 300 MiB
            allowed_extensions: vec!["webm".to_string(), "mp4".to_string()],
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("RECBOX_").split("__"))
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.storage.dir.as_os_str().is_empty() {
            return Err(Error::Internal {
                operation: "validate config: storage.dir must not be empty".to_string(),
            });
        }

        if self.storage.max_upload_bytes == 0 {
            return Err(Error::Internal {
                operation: "validate config: storage.max_upload_bytes must be greater than zero".to_string(),
            });
        }

        if self.storage.allowed_extensions.is_empty() {
            return Err(Error::Internal {
                operation: "validate config: storage.allowed_extensions must list at least one extension".to_string(),
            });
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_config_file() {
        Jail::expect_with(|_jail| {
            let args = Args {
                config: "missing.yaml".to_string(),
                validate: false,
            };

            let config = Config::load(&args)?;

            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 5000);
            assert_eq!(config.storage.dir, PathBuf::from("myRecordings"));
            assert_eq!(config.storage.max_upload_bytes, 300 * 1024 * 1024);
            assert_eq!(config.storage.allowed_extensions, vec!["webm", "mp4"]);

            Ok(())
        });
    }

    #[test]
    fn test_yaml_config() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
host: 127.0.0.1
port: 8080
storage:
  dir: /var/lib/recbox/recordings
  max_upload_bytes: 1048576
  allowed_extensions:
    - webm
"#,
            )?;

            let args = Args {
                config: "test.yaml".to_string(),
                validate: false,
            };

            let config = Config::load(&args)?;

            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 8080);
            assert_eq!(config.storage.dir, PathBuf::from("/var/lib/recbox/recordings"));
            assert_eq!(config.storage.max_upload_bytes, 1048576);
            assert_eq!(config.storage.allowed_extensions, vec!["webm"]);

            Ok(())
        });
    }

    #[test]
    fn test_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
port: 8080
"#,
            )?;

            jail.set_env("RECBOX_HOST", "127.0.0.1");
            jail.set_env("RECBOX_PORT", "9000");
            jail.set_env("RECBOX_STORAGE__DIR", "captures");

            let args = Args {
                config: "test.yaml".to_string(),
                validate: false,
            };

            let config = Config::load(&args)?;

            // Env vars should override the YAML values
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 9000);
            assert_eq!(config.storage.dir, PathBuf::from("captures"));

            Ok(())
        });
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
storage:
  allowed_extensions: []
"#,
            )?;

            let args = Args {
                config: "test.yaml".to_string(),
                validate: false,
            };

            assert!(Config::load(&args).is_err());

            Ok(())
        });
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let config = Config {
            storage: StorageConfig {
                max_upload_bytes: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            ..Default::default()
        };

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }
}
