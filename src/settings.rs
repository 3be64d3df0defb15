use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/receive-data";
const DEFAULT_CONFIG_NAME: &str = "threadcheck";
const ENV_PREFIX: &str = "THREADCHECK";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Scoring service URL the record is POSTed to.
    pub endpoint: String,
    /// Hosts (and their subdomains) a page URL must belong to.
    pub supported_domains: Vec<String>,
    pub timeout_secs: u64,
}

impl Settings {
    /// Defaults, then `threadcheck.toml` (or `config_file` when given), then
    /// `THREADCHECK_*` environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("supported_domains", vec!["amazon.com"])?
            .set_default("timeout_secs", 30)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("supported_domains"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
