use std::path::PathBuf;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, VCF_EXTENSION};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Directories used by the upload/convert/download flow.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub download_dir: PathBuf,
    pub temp_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extension: String,
}

impl UploadConfig {
    /// ## Summary
    /// Returns `true` if `filename` carries the allowed extension (case-insensitive).
    #[must_use]
    pub fn accepts(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(&self.allowed_extension))
    }

    /// ## Summary
    /// Returns the size cap as a `usize`, saturating on narrow targets.
    #[must_use]
    pub fn max_bytes_usize(&self) -> usize {
        usize::try_from(self.max_bytes).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    ///
    /// Environment variables use the `VCFSHEET_` prefix and `__` between
    /// sections, e.g. `VCFSHEET_UPLOAD__MAX_BYTES=1048576`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(Self::environment())
    }

    /// Environment source: `VCFSHEET_` prefix, `__` between section and key.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("VCFSHEET")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("storage.download_dir", "downloads")?
            .set_default("storage.temp_dir", "temp")?
            .set_default("upload.max_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("upload.allowed_extension", VCF_EXTENSION)?
            .set_default("logging.level", "debug")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env vars
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// ## Summary
    /// Checks invariants the deserializer cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for a zero upload cap or an empty extension.
    pub fn validate(&self) -> CoreResult<()> {
        if self.upload.max_bytes == 0 {
            return Err(CoreError::ConfigError(
                "upload.max_bytes must be greater than zero".to_string(),
            ));
        }

        if self.upload.allowed_extension.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "upload.allowed_extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration resolved");

    Ok(settings)
}
