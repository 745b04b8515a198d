use std::path::Path;

use anyhow::{ensure, Context, Result};
use config::builder::DefaultState;
use config::{Config as RConfig, ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_BACKEND_URL;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Scheme, host and port of the backend; endpoint paths are appended to it.
    pub backend_url: String,
}

pub struct ConfigLoader;

impl ConfigLoader {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(RConfig::builder().set_default("backend_url", DEFAULT_BACKEND_URL)?)
    }

    pub fn load_default_config() -> Result<Config> {
        Self::build(Self::builder()?)
    }

    /// Defaults overlaid with the TOML file at `path`. Environment variables are not consulted.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let builder = Self::builder()?.add_source(File::from(path).format(FileFormat::Toml));
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
        let config: Config = builder
            .build()
            .context("failed to load config file")?
            .try_deserialize()
            .context("failed to parse config file")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<()> {
        let url = Url::parse(&config.backend_url)
            .with_context(|| format!("invalid backend_url: {}", config.backend_url))?;
        ensure!(
            matches!(url.scheme(), "http" | "https"),
            "backend_url must use http or https, got {}",
            url.scheme()
        );
        ensure!(
            url.host_str().is_some(),
            "backend_url has no host: {}",
            config.backend_url
        );
        Ok(())
    }
}
