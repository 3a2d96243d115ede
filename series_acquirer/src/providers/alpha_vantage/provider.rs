use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::config::AcquirerConfig;
use tracing::debug;

use crate::{
    models::request_params::ProviderRequest,
    providers::{ProviderError, ProviderInitError, SeriesSource},
};

pub struct AlphaVantageProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl AlphaVantageProvider {
    /// Creates a new provider against `base_url` with a fixed overall timeout.
    ///
    /// The API key is passed in explicitly; this type never reads the
    /// environment or config files.
    pub fn new(
        api_key: SecretString,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderInitError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(ProviderInitError::EmptyApiKey);
        }
        let base_url = Url::parse(base_url).map_err(|e| ProviderInitError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("series_acquirer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn from_config(
        api_key: SecretString,
        config: &AcquirerConfig,
    ) -> Result<Self, ProviderInitError> {
        Self::new(api_key, &config.base_url, config.timeout())
    }
}

#[async_trait]
impl SeriesSource for AlphaVantageProvider {
    async fn fetch_raw(&self, request: &ProviderRequest) -> Result<String, ProviderError> {
        let mut query = request.query_pairs();
        debug!(
            ticker = %request.ticker,
            timeframe = %request.timeframe,
            query = ?query,
            "requesting time series"
        );
        query.push(("apikey", self.api_key.expose_secret().to_string()));

        // reqwest errors embed the full URL, which carries the API key.
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.without_url()))
    }
}
