use crate::models::timeframe::Timeframe;

/// Provider field labels for one timeframe.
///
/// `volume` lists accepted labels in priority order; the first one present
/// in a row is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Labels for open, high, low, close, in that order.
    pub ohlc: [&'static str; 4],
    pub volume: &'static [&'static str],
}

/// One row of the fixed timeframe → provider lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParameters {
    /// Provider operation code.
    pub function: &'static str,
    pub interval: Option<&'static str>,
    pub outputsize: Option<&'static str>,
    /// JSON key the series is nested under in the response.
    pub envelope_key: &'static str,
    pub columns: ColumnMap,
}

/// Everything needed to issue one provider call, minus the credential.
///
/// The API key is attached by the provider at send time so it never ends up
/// in logs or `Debug` output of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub ticker: String,
    pub timeframe: Timeframe,
    pub parameters: RequestParameters,
}

impl ProviderRequest {
    pub fn new(ticker: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            ticker: ticker.into(),
            timeframe,
            parameters: timeframe.parameters(),
        }
    }

    pub fn envelope_key(&self) -> &'static str {
        self.parameters.envelope_key
    }

    /// Query pairs for the provider, without `apikey`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("function", self.parameters.function.to_string()),
            ("symbol", self.ticker.clone()),
        ];
        if let Some(interval) = self.parameters.interval {
            pairs.push(("interval", interval.to_string()));
        }
        if let Some(outputsize) = self.parameters.outputsize {
            pairs.push(("outputsize", outputsize.to_string()));
        }
        pairs
    }
}
