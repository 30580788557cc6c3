use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// A single lookup against the color-naming service failed.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Service { url: String, status: StatusCode },
    /// The body did not parse, or carried no `name.value`.
    #[error("malformed response from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid sampling options: {0}")]
    InvalidOptions(&'static str),
    #[error("lookup for hue {hue} failed")]
    Lookup {
        hue: u16,
        #[source]
        source: LookupError,
    },
}

#[derive(Debug, Error)]
pub enum SwatchError {
    #[error("a swatch of {0} tiles does not fit in one image with this layout")]
    TooLarge(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
}
