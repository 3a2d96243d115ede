//! The acquisition pipeline: fetch → decode → reshape → window → render.
//!
//! One provider round trip per call and no state between calls; the
//! acquirer only holds its [`SeriesSource`].

use tracing::{info, warn};

use crate::{
    errors::AcquireError,
    io::render::render,
    models::{
        bar::Bar,
        request_params::ProviderRequest,
        series::{RenderedSeries, SeriesTable, WindowedSeries},
        timeframe::Timeframe,
    },
    providers::{
        SeriesSource,
        alpha_vantage::{DecodeError, RawRows, RawSeriesEnvelope},
    },
    window::window,
};

pub struct TimeSeriesAcquirer<S> {
    source: S,
}

impl<S: SeriesSource> TimeSeriesAcquirer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, window and render the series for `ticker` over `timeframe`.
    ///
    /// `timeframe` must be `intraday`, `weekly` or `monthly`; anything else
    /// fails with [`AcquireError::InvalidTimeframe`] before the provider is
    /// contacted.
    pub async fn fetch(&self, ticker: &str, timeframe: &str) -> Result<RenderedSeries, AcquireError> {
        let timeframe: Timeframe = timeframe.parse()?;
        let windowed = self.fetch_series(ticker, timeframe).await?;
        let ticker = ticker.trim().to_string();

        let table = render(&windowed)?;
        if table.is_empty() {
            return Err(AcquireError::NoData { ticker, timeframe });
        }

        Ok(RenderedSeries {
            ticker,
            timeframe,
            description: windowed.description,
            table,
            rows: windowed.bars.len(),
        })
    }

    /// Typed variant of [`fetch`](Self::fetch) returning the window itself.
    pub async fn fetch_series(
        &self,
        ticker: &str,
        timeframe: Timeframe,
    ) -> Result<WindowedSeries, AcquireError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(AcquireError::EmptyTicker);
        }

        let request = ProviderRequest::new(ticker, timeframe);
        let body = self.source.fetch_raw(&request).await.map_err(|source| {
            AcquireError::ProviderUnreachable {
                ticker: ticker.to_string(),
                timeframe,
                source,
            }
        })?;

        let rows = decode_rows(&request, &body)?;
        let table = build_table(&request, &rows)?.ok_or_else(|| AcquireError::NoData {
            ticker: ticker.to_string(),
            timeframe,
        })?;

        let windowed = window(table);
        if windowed.is_empty() {
            return Err(AcquireError::NoData {
                ticker: ticker.to_string(),
                timeframe,
            });
        }

        info!(
            ticker,
            %timeframe,
            rows = windowed.len(),
            description = %windowed.description,
            "acquired time series"
        );
        Ok(windowed)
    }
}

fn decode_rows(request: &ProviderRequest, body: &str) -> Result<RawRows, AcquireError> {
    let ticker = || request.ticker.clone();
    let timeframe = request.timeframe;
    let expected_key = request.envelope_key();

    let envelope = RawSeriesEnvelope::decode(body, expected_key).map_err(|e| {
        AcquireError::UnexpectedSchema {
            ticker: ticker(),
            timeframe,
            expected_key,
            detail: match e {
                DecodeError::MissingKey { .. } => "key not present in response".to_string(),
                other => other.to_string(),
            },
        }
    })?;

    match envelope {
        RawSeriesEnvelope::Valid { rows, note } => {
            if let Some(note) = note {
                warn!(ticker = %request.ticker, %timeframe, %note, "provider returned a Note/Information notice (often rate limiting), proceeding with returned data");
            }
            Ok(rows)
        }
        RawSeriesEnvelope::ProviderError(message) => Err(AcquireError::ProviderRejected {
            ticker: ticker(),
            timeframe,
            message,
        }),
        RawSeriesEnvelope::RateLimited(note) => {
            warn!(ticker = %request.ticker, %timeframe, %note, "provider returned a Note/Information notice and no data");
            Err(AcquireError::UnexpectedSchema {
                ticker: ticker(),
                timeframe,
                expected_key,
                detail: format!("key not present; provider notice: {note}"),
            })
        }
    }
}

/// Parse every row, failing the whole call on the first bad field.
fn build_table(request: &ProviderRequest, rows: &RawRows) -> Result<Option<SeriesTable>, AcquireError> {
    let columns = &request.parameters.columns;
    let bars = rows
        .iter()
        .map(|(timestamp, fields)| Bar::from_row(timestamp, fields, columns))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|m| AcquireError::MalformedBar {
            ticker: request.ticker.clone(),
            timeframe: request.timeframe,
            timestamp: m.timestamp,
            field: m.field,
            value: m.value,
            expected: m.expected,
        })?;
    Ok(SeriesTable::new(request.timeframe, bars))
}
