//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! Prices are kept as [`Decimal`] so the provider's textual precision
//! survives parsing and rendering unchanged ("131.7500" stays "131.7500").

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::Value;

use crate::models::request_params::ColumnMap;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const EXPECT_NUMBER: &str = "a number";
const EXPECT_WHOLE_NUMBER: &str = "a non-negative whole number";
const EXPECT_TIMESTAMP: &str = "a YYYY-MM-DD or YYYY-MM-DD HH:MM:SS timestamp";

/// A single time-series bar (OHLCV) for a given timestamp.
///
/// Timestamps are naive: the provider reports them in the exchange's local
/// time and no conversion is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub timestamp: NaiveDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// A row field that was missing or could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedField {
    pub timestamp: String,
    /// Canonical field name (`timestamp`, `open`, ..., `volume`).
    pub field: &'static str,
    /// The offending raw value, or `None` when the label was absent.
    pub value: Option<String>,
    /// What the field should have held.
    pub expected: &'static str,
}

/// Parse either `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD` (taken as midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Provider fields arrive as JSON strings; bare JSON numbers are accepted too.
/// Anything else is returned as its JSON text in the error arm.
fn field_text(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(other.to_string()),
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

impl Bar {
    /// Build a bar from one provider row using the timeframe's label mapping.
    ///
    /// Labels outside `columns` (adjusted close, dividends, split factors) are ignored.
    pub fn from_row(
        timestamp: &str,
        fields: &IndexMap<String, Value>,
        columns: &ColumnMap,
    ) -> Result<Self, MalformedField> {
        let malformed = |field: &'static str, value: Option<String>, expected: &'static str| {
            MalformedField {
                timestamp: timestamp.to_string(),
                field,
                value,
                expected,
            }
        };

        let ts = parse_timestamp(timestamp)
            .ok_or_else(|| malformed("timestamp", Some(timestamp.to_string()), EXPECT_TIMESTAMP))?;

        let number = |name: &'static str, raw: Option<&Value>| -> Result<(Decimal, String), MalformedField> {
            let raw = raw.ok_or_else(|| malformed(name, None, EXPECT_NUMBER))?;
            let text = field_text(raw).map_err(|v| malformed(name, Some(v), EXPECT_NUMBER))?;
            match parse_decimal(&text) {
                Some(d) => Ok((d, text)),
                None => Err(malformed(name, Some(text), EXPECT_NUMBER)),
            }
        };

        let [open_label, high_label, low_label, close_label] = columns.ohlc;
        let (open, _) = number("open", fields.get(open_label))?;
        let (high, _) = number("high", fields.get(high_label))?;
        let (low, _) = number("low", fields.get(low_label))?;
        let (close, _) = number("close", fields.get(close_label))?;

        let raw_volume = columns.volume.iter().find_map(|label| fields.get(*label));
        let (volume, text) = number("volume", raw_volume)?;
        let volume = volume
            .fract()
            .is_zero()
            .then(|| volume.to_u64())
            .flatten()
            .ok_or_else(|| malformed("volume", Some(text), EXPECT_WHOLE_NUMBER))?;

        Ok(Self {
            timestamp: ts,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}
