//! CSV rendering of a window as a literal data block, and the reverse parse.
//!
//! Prices keep the scale they were parsed with, so a rendered block re-reads
//! to exactly the same bars.

use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    bar::{Bar, DATE_FORMAT, DATETIME_FORMAT, parse_timestamp},
    series::WindowedSeries,
    timeframe::Timeframe,
};

pub const HEADER: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while flushing CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("rendered CSV is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unexpected header {found:?}")]
    Header { found: Vec<String> },

    #[error("row {row}: invalid {field} value {value:?}")]
    Field {
        row: usize,
        field: &'static str,
        value: String,
    },
}

fn format_timestamp(ts: NaiveDateTime, timeframe: Timeframe) -> String {
    if timeframe.has_time_of_day() || ts.time() != NaiveTime::MIN {
        ts.format(DATETIME_FORMAT).to_string()
    } else {
        ts.format(DATE_FORMAT).to_string()
    }
}

/// Render the window as CSV with a header row, ascending.
///
/// An empty window renders to an empty string (no header), which callers
/// treat as "no data".
pub fn render(series: &WindowedSeries) -> Result<String, RenderError> {
    if series.is_empty() {
        return Ok(String::new());
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for bar in &series.bars {
        writer.write_record([
            format_timestamp(bar.timestamp, series.timeframe),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse a block produced by [`render`] back into bars.
pub fn parse_rendered(text: &str) -> Result<Vec<Bar>, RenderError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(RenderError::Header {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut bars = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let cell = |idx: usize| record.get(idx).unwrap_or_default();
        let invalid = |field: &'static str, value: &str| RenderError::Field {
            row,
            field,
            value: value.to_string(),
        };
        let price = |idx: usize| {
            Decimal::from_str(cell(idx)).map_err(|_| invalid(HEADER[idx], cell(idx)))
        };

        bars.push(Bar {
            timestamp: parse_timestamp(cell(0)).ok_or_else(|| invalid("timestamp", cell(0)))?,
            open: price(1)?,
            high: price(2)?,
            low: price(3)?,
            close: price(4)?,
            volume: cell(5).parse().map_err(|_| invalid("volume", cell(5)))?,
        });
    }
    Ok(bars)
}
