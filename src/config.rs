//! TOML configuration.
//!
//! Every field has a default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! [service]
//! base_url = "https://www.thecolorapi.com"
//! timeout_secs = 10
//!
//! [sampler]
//! step = 5
//! max_consecutive_repeats = 10
//! on_failure = "abort"
//!
//! [cache]
//! capacity = 64
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::lookup::DEFAULT_BASE_URL;
use crate::sampler::{FailurePolicy, SampleOptions};
use crate::swatch::SwatchLayout;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub service: ServiceConfig,
    pub sampler: SamplerConfig,
    pub cache: CacheConfig,
    pub swatch: SwatchLayout,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    pub step: u16,
    pub max_consecutive_repeats: u32,
    pub on_failure: FailurePolicy,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        let options = SampleOptions::default();
        Self {
            step: options.step,
            max_consecutive_repeats: options.max_consecutive_repeats,
            on_failure: options.on_failure,
        }
    }
}

impl From<SamplerConfig> for SampleOptions {
    fn from(config: SamplerConfig) -> Self {
        SampleOptions {
            step: config.step,
            max_consecutive_repeats: config.max_consecutive_repeats,
            on_failure: config.on_failure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: crate::cache::DEFAULT_CAPACITY,
        }
    }
}
