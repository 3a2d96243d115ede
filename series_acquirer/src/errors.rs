use thiserror::Error;

use crate::{io::render::RenderError, models::timeframe::Timeframe, providers::ProviderError};

/// The unified error type for one acquisition call.
///
/// Every variant is terminal for the call; nothing is retried internally.
/// Variants carry the ticker and timeframe (when known) so callers can log or
/// surface them without extra context.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The timeframe string is not one of `intraday`, `weekly`, `monthly`.
    #[error("Invalid timeframe '{value}': expected one of intraday, weekly, monthly")]
    InvalidTimeframe { value: String },

    /// The ticker was empty or whitespace.
    #[error("Ticker must not be empty")]
    EmptyTicker,

    /// Transport failure or non-success HTTP status.
    #[error("Provider unreachable for {ticker} ({timeframe}): {source}")]
    ProviderUnreachable {
        ticker: String,
        timeframe: Timeframe,
        #[source]
        source: ProviderError,
    },

    /// The provider answered with its own error envelope.
    #[error("Provider rejected request for {ticker} ({timeframe}): {message}")]
    ProviderRejected {
        ticker: String,
        timeframe: Timeframe,
        message: String,
    },

    /// The body was not the expected JSON shape.
    #[error("Unexpected response for {ticker} ({timeframe}), expected key `{expected_key}`: {detail}")]
    UnexpectedSchema {
        ticker: String,
        timeframe: Timeframe,
        expected_key: &'static str,
        detail: String,
    },

    /// A row had a missing or unparsable field; the whole fetch is discarded.
    #[error("Malformed bar for {ticker} ({timeframe}) at {timestamp}: field `{field}` {}", describe_value(.value, .expected))]
    MalformedBar {
        ticker: String,
        timeframe: Timeframe,
        timestamp: String,
        field: &'static str,
        value: Option<String>,
        expected: &'static str,
    },

    /// Nothing left to hand off after windowing.
    #[error("No data for {ticker} ({timeframe})")]
    NoData { ticker: String, timeframe: Timeframe },

    /// The window could not be written as a data block.
    #[error("Failed to render series: {0}")]
    Render(#[from] RenderError),
}

fn describe_value(value: &Option<String>, expected: &str) -> String {
    match value {
        Some(v) => format!("has value {v:?}, expected {expected}"),
        None => "is missing".to_string(),
    }
}

impl AcquireError {
    /// True for errors caused by the caller's input rather than the provider.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AcquireError::InvalidTimeframe { .. } | AcquireError::EmptyTicker
        )
    }
}
