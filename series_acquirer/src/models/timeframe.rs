//! The closed set of strategy timeframes and their fixed provider lookup table.
//!
//! Every per-timeframe decision (provider function, envelope key, column
//! labels, window size, description wording) is an exhaustive `match` on
//! [`Timeframe`], so adding a variant is a compile error until every table
//! row is filled in.

use std::{fmt, str::FromStr};

use crate::{
    errors::AcquireError,
    models::request_params::{ColumnMap, RequestParameters},
};

/// Strategy horizon requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// Latest trading session, 5-minute bars.
    Intraday,
    /// Last 7 daily bars.
    Weekly,
    /// Last 24 monthly bars.
    Monthly,
}

const OHLC_LABELS: [&str; 4] = ["1. open", "2. high", "3. low", "4. close"];

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Intraday, Timeframe::Weekly, Timeframe::Monthly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Timeframe::Intraday => "intraday",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }

    /// Resolve the fixed provider parameters for this timeframe.
    pub const fn parameters(self) -> RequestParameters {
        match self {
            Timeframe::Intraday => RequestParameters {
                function: "TIME_SERIES_INTRADAY",
                interval: Some("5min"),
                outputsize: Some("full"),
                envelope_key: "Time Series (5min)",
                columns: ColumnMap {
                    ohlc: OHLC_LABELS,
                    volume: &["5. volume"],
                },
            },
            // The adjusted daily series labels volume "6. volume" on current
            // API versions; older payloads use "5. volume".
            Timeframe::Weekly => RequestParameters {
                function: "TIME_SERIES_DAILY_ADJUSTED",
                interval: None,
                outputsize: Some("compact"),
                envelope_key: "Time Series (Daily)",
                columns: ColumnMap {
                    ohlc: OHLC_LABELS,
                    volume: &["5. volume", "6. volume"],
                },
            },
            Timeframe::Monthly => RequestParameters {
                function: "TIME_SERIES_MONTHLY_ADJUSTED",
                interval: None,
                outputsize: None,
                envelope_key: "Monthly Adjusted Time Series",
                columns: ColumnMap {
                    ohlc: OHLC_LABELS,
                    volume: &["6. volume"],
                },
            },
        }
    }

    /// Whether bar timestamps carry a meaningful time of day.
    pub const fn has_time_of_day(self) -> bool {
        match self {
            Timeframe::Intraday => true,
            Timeframe::Weekly | Timeframe::Monthly => false,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = AcquireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intraday" => Ok(Timeframe::Intraday),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            _ => Err(AcquireError::InvalidTimeframe {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intraday_parameters() {
        let p = Timeframe::Intraday.parameters();
        assert_eq!(p.function, "TIME_SERIES_INTRADAY");
        assert_eq!(p.interval, Some("5min"));
        assert_eq!(p.outputsize, Some("full"));
        assert_eq!(p.envelope_key, "Time Series (5min)");
        assert_eq!(p.columns.volume, &["5. volume"]);
    }

    #[test]
    fn weekly_parameters() {
        let p = Timeframe::Weekly.parameters();
        assert_eq!(p.function, "TIME_SERIES_DAILY_ADJUSTED");
        assert_eq!(p.interval, None);
        assert_eq!(p.outputsize, Some("compact"));
        assert_eq!(p.envelope_key, "Time Series (Daily)");
    }

    #[test]
    fn monthly_parameters() {
        let p = Timeframe::Monthly.parameters();
        assert_eq!(p.function, "TIME_SERIES_MONTHLY_ADJUSTED");
        assert_eq!(p.interval, None);
        assert_eq!(p.outputsize, None);
        assert_eq!(p.envelope_key, "Monthly Adjusted Time Series");
        assert_eq!(p.columns.volume, &["6. volume"]);
    }

    #[test]
    fn parses_known_names_loosely() {
        assert_eq!("intraday".parse::<Timeframe>().unwrap(), Timeframe::Intraday);
        assert_eq!(" Weekly ".parse::<Timeframe>().unwrap(), Timeframe::Weekly);
        assert_eq!("MONTHLY".parse::<Timeframe>().unwrap(), Timeframe::Monthly);
        for tf in Timeframe::ALL {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for bad in ["daily", "", "5min", "yearly"] {
            match bad.parse::<Timeframe>() {
                Err(AcquireError::InvalidTimeframe { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidTimeframe for {bad:?}, got {other:?}"),
            }
        }
    }
}
