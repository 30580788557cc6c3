//! Access to the remote color-naming service.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::LookupError;
use crate::record::ColorRecord;

pub const DEFAULT_BASE_URL: &str = "https://www.thecolorapi.com";

/// A point in HSL space to be named. Saturation and lightness are percentages and
/// are passed to the service as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslQuery {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslQuery {
    pub fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for HslQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}%,{}%", self.hue, self.saturation, self.lightness)
    }
}

/// Something that can name a color.
pub trait ColorLookup {
    fn lookup(
        &self,
        query: HslQuery,
    ) -> impl Future<Output = Result<ColorRecord, LookupError>> + Send;
}

/// HTTP client for a thecolorapi.com compatible service.
#[derive(Debug, Clone)]
pub struct ColorApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ColorApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Builds a client with the timeout and user agent from `config`.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(http, config.base_url.as_str()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The identify endpoint for `query`, e.g. `<base>/id?hsl=120,100%,50%`.
    pub fn endpoint(&self, query: &HslQuery) -> String {
        format!("{}/id?hsl={}", self.base_url, query)
    }
}

impl Default for ColorApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ColorLookup for ColorApiClient {
    async fn lookup(&self, query: HslQuery) -> Result<ColorRecord, LookupError> {
        let url = self.endpoint(&query);
        debug!("GET {url}");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(source) => {
                warn!("request for hsl({query}) failed: {source}");
                return Err(LookupError::Network { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("service answered {status} for hsl({query})");
            return Err(LookupError::Service { url, status });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(LookupError::Network { url, source }),
        };

        let record: ColorRecord = serde_json::from_slice(&body)
            .map_err(|source| LookupError::Malformed { url, source })?;
        Ok(record.with_sampled_hue(query.hue))
    }
}
