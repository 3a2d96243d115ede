//! Provider seam for market data sources.
//!
//! [`SeriesSource`] is the single external capability the acquirer consumes:
//! given a [`ProviderRequest`], return the raw response body of one HTTP round
//! trip. Decoding, validation and reshaping all happen on the caller's side,
//! so a source never needs to understand the payload.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use series_acquirer::models::request_params::ProviderRequest;
//! use series_acquirer::providers::{ProviderError, SeriesSource};
//!
//! struct CannedSource(&'static str);
//!
//! #[async_trait]
//! impl SeriesSource for CannedSource {
//!     async fn fetch_raw(&self, _request: &ProviderRequest) -> Result<String, ProviderError> {
//!         Ok(self.0.to_string())
//!     }
//! }
//! ```

pub mod alpha_vantage;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::request_params::ProviderRequest;

/// Fetches the raw time-series body for one request.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Issue exactly one request. No retry.
    async fn fetch_raw(&self, request: &ProviderRequest) -> Result<String, ProviderError>;
}

#[async_trait]
impl<S: SeriesSource + ?Sized> SeriesSource for Box<S> {
    async fn fetch_raw(&self, request: &ProviderRequest) -> Result<String, ProviderError> {
        (**self).fetch_raw(request).await
    }
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("API key must not be empty")]
    EmptyApiKey,
}

/// Errors that can occur within a [`SeriesSource`] implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during the request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timeframe::Timeframe;

    struct EchoSource;

    #[async_trait]
    impl SeriesSource for EchoSource {
        async fn fetch_raw(&self, request: &ProviderRequest) -> Result<String, ProviderError> {
            Ok(format!("{}:{}", request.ticker, request.parameters.function))
        }
    }

    struct DownSource;

    #[async_trait]
    impl SeriesSource for DownSource {
        async fn fetch_raw(&self, _request: &ProviderRequest) -> Result<String, ProviderError> {
            Err(ProviderError::Status {
                status: 503,
                body: "maintenance".into(),
            })
        }
    }

    // Picked at runtime, so it has to be a trait object.
    fn get_source(name: &str) -> Box<dyn SeriesSource> {
        if name == "echo" {
            Box::new(EchoSource)
        } else {
            Box::new(DownSource)
        }
    }

    #[tokio::test]
    async fn dynamic_source_dispatch() {
        let request = ProviderRequest::new("IBM", Timeframe::Monthly);

        let body = get_source("echo").fetch_raw(&request).await.unwrap();
        assert_eq!(body, "IBM:TIME_SERIES_MONTHLY_ADJUSTED");

        let err = get_source("down").fetch_raw(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
    }
}
