//! Boundary decoding of the provider's JSON body.
//!
//! The body is inspected exactly once here and turned into a
//! [`RawSeriesEnvelope`]; nothing downstream looks at `serde_json::Value`.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// timestamp string -> (field label -> raw value), in provider order.
///
/// Values stay as JSON so a bad field is reported against its row rather
/// than failing the whole envelope.
pub type RawRows = IndexMap<String, IndexMap<String, serde_json::Value>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSeriesEnvelope {
    /// The expected series key was present. `note` carries any `Note` or
    /// `Information` text that arrived alongside the data.
    Valid { rows: RawRows, note: Option<String> },
    /// The provider's own `"Error Message"`.
    ProviderError(String),
    /// A `Note` or `Information` notice with no series data. In practice this
    /// is usually a call-frequency limit, but the text is not inspected.
    RateLimited(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("missing key `{key}`")]
    MissingKey { key: &'static str },

    #[error("key `{key}` does not hold a map of timestamped field maps: {source}")]
    Shape {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Body {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    /// Legacy rate-limit notice.
    #[serde(rename = "Note")]
    note: Option<String>,
    /// Current rate-limit / premium-endpoint notice.
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(flatten)]
    rest: IndexMap<String, serde_json::Value>,
}

impl RawSeriesEnvelope {
    /// Decode a response body, looking for the series under `envelope_key`.
    ///
    /// Precedence: provider error, then series data, then a bare notice.
    pub fn decode(body: &str, envelope_key: &'static str) -> Result<Self, DecodeError> {
        let mut body: Body = serde_json::from_str(body).map_err(DecodeError::Json)?;

        if let Some(message) = body.error_message {
            return Ok(RawSeriesEnvelope::ProviderError(message));
        }

        let note = body.note.or(body.information);

        match body.rest.shift_remove(envelope_key) {
            Some(series) => {
                let rows: RawRows = serde_json::from_value(series).map_err(|source| {
                    DecodeError::Shape {
                        key: envelope_key,
                        source,
                    }
                })?;
                Ok(RawSeriesEnvelope::Valid { rows, note })
            }
            None => match note {
                Some(note) => Ok(RawSeriesEnvelope::RateLimited(note)),
                None => Err(DecodeError::MissingKey { key: envelope_key }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "Time Series (Daily)";

    #[test]
    fn decodes_valid_series_in_provider_order() {
        let body = r#"{
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-06-14": {"1. open": "169.0", "5. volume": "100"},
                "2024-06-13": {"1. open": "168.0", "5. volume": "90"}
            }
        }"#;
        match RawSeriesEnvelope::decode(body, KEY).unwrap() {
            RawSeriesEnvelope::Valid { rows, note } => {
                assert_eq!(note, None);
                let keys: Vec<_> = rows.keys().cloned().collect();
                assert_eq!(keys, vec!["2024-06-14", "2024-06-13"]);
                assert_eq!(rows["2024-06-13"]["1. open"], "168.0");
                let labels: Vec<_> = rows["2024-06-14"].keys().cloned().collect();
                assert_eq!(labels, vec!["1. open", "5. volume"]);
            }
            other => panic!("expected valid envelope, got {other:?}"),
        }
    }

    #[test]
    fn non_string_field_values_are_left_for_row_parsing() {
        let body = r#"{"Time Series (Daily)": {"2024-06-14": {"1. open": 1.5, "4. close": null}}}"#;
        match RawSeriesEnvelope::decode(body, KEY).unwrap() {
            RawSeriesEnvelope::Valid { rows, .. } => {
                assert_eq!(rows["2024-06-14"]["1. open"], 1.5);
                assert!(rows["2024-06-14"]["4. close"].is_null());
            }
            other => panic!("expected valid envelope, got {other:?}"),
        }
    }

    #[test]
    fn error_message_wins_over_everything() {
        let body = r#"{"Error Message": "Invalid API call.", "Time Series (Daily)": {}}"#;
        assert_eq!(
            RawSeriesEnvelope::decode(body, KEY).unwrap(),
            RawSeriesEnvelope::ProviderError("Invalid API call.".into())
        );
    }

    #[test]
    fn note_alongside_data_is_kept() {
        let body = r#"{
            "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute.",
            "Time Series (Daily)": {"2024-06-14": {"1. open": "1"}}
        }"#;
        match RawSeriesEnvelope::decode(body, KEY).unwrap() {
            RawSeriesEnvelope::Valid { rows, note } => {
                assert_eq!(rows.len(), 1);
                assert!(note.unwrap().contains("API call frequency"));
            }
            other => panic!("expected valid envelope, got {other:?}"),
        }
    }

    #[test]
    fn bare_notice_is_rate_limited() {
        let body = r#"{"Information": "API rate limit reached."}"#;
        assert_eq!(
            RawSeriesEnvelope::decode(body, KEY).unwrap(),
            RawSeriesEnvelope::RateLimited("API rate limit reached.".into())
        );
    }

    #[test]
    fn missing_key_without_notice() {
        let body = r#"{"Meta Data": {}}"#;
        assert!(matches!(
            RawSeriesEnvelope::decode(body, KEY),
            Err(DecodeError::MissingKey { key: KEY })
        ));
    }

    #[test]
    fn wrong_shape_and_bad_json() {
        let body = r#"{"Time Series (Daily)": ["not", "a", "map"]}"#;
        assert!(matches!(
            RawSeriesEnvelope::decode(body, KEY),
            Err(DecodeError::Shape { .. })
        ));
        let flat = r#"{"Time Series (Daily)": {"2024-06-14": "169.0"}}"#;
        assert!(matches!(
            RawSeriesEnvelope::decode(flat, KEY),
            Err(DecodeError::Shape { .. })
        ));
        assert!(matches!(
            RawSeriesEnvelope::decode("<html>", KEY),
            Err(DecodeError::Json(_))
        ));
    }
}
