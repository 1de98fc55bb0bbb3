//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    GENERATED_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, MIN_PASSWORD_SCORE,
};
use crate::error::AppError;
use crate::telemetry::LogFormat;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub password: PasswordSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordSettings {
    pub min_length: usize,
    pub max_length: usize,
    pub min_score: u8,
    pub generated_length: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env)?
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Defaults and config files, without the environment overlay.
    fn builder(env: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", "gym-admin")?
            .set_default("app.log_format", "json")?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("password.min_length", MIN_PASSWORD_LENGTH as u64)?
            .set_default("password.max_length", MAX_PASSWORD_LENGTH as u64)?
            .set_default("password.min_score", u64::from(MIN_PASSWORD_SCORE))?
            .set_default("password.generated_length", GENERATED_PASSWORD_LENGTH as u64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_everything_but_database_url() {
        let config = AppConfig::builder("test")
            .unwrap()
            .set_override("database.url", "postgres://localhost/gym")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap();

        assert_eq!(config.app.env, "test");
        assert_eq!(config.app.log_format, LogFormat::Json);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.password.min_length, MIN_PASSWORD_LENGTH);
        assert_eq!(config.password.generated_length, GENERATED_PASSWORD_LENGTH);
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let result = AppConfig::builder("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();

        assert!(result.is_err());
    }
}
