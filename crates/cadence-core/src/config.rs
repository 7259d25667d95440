use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub series: SeriesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address the listener binds to, as "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Upper bounds applied to repeat requests arriving over HTTP.
///
/// The expander itself accepts any `weeks >= 1`; these limits only protect
/// the service from requests that would flood the session store.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesConfig {
    pub max_weeks: u32,
    pub max_patterns: usize,
}

impl SeriesConfig {
    /// ## Summary
    /// Checks a requested repeat span against the configured limits.
    ///
    /// ## Errors
    /// Returns `CoreError::LimitExceeded` if `weeks` or `pattern_count`
    /// exceed the configured maximums.
    pub fn check_limits(&self, weeks: u32, pattern_count: usize) -> CoreResult<()> {
        if weeks > self.max_weeks {
            return Err(CoreError::LimitExceeded(format!(
                "weeks must be at most {}, got {weeks}",
                self.max_weeks
            )));
        }
        if pattern_count > self.max_patterns {
            return Err(CoreError::LimitExceeded(format!(
                "at most {} patterns are allowed, got {pattern_count}",
                self.max_patterns
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "debug")?
            .set_default("series.max_weeks", 52)?
            .set_default("series.max_patterns", 14)?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
