//! Timeframe-specific windowing of a normalized series.
//!
//! Pure functions: no I/O, no clock. The window for each timeframe is
//! - intraday: every bar on the latest calendar date present,
//! - weekly: the last [`WEEKLY_WINDOW`] bars,
//! - monthly: the last [`MONTHLY_WINDOW`] bars.
//!
//! A shorter series is kept whole; the description reports the true count.

use crate::models::{
    bar::Bar,
    series::{SeriesTable, WindowedSeries},
    timeframe::Timeframe,
};

pub const WEEKLY_WINDOW: usize = 7;
pub const MONTHLY_WINDOW: usize = 24;

/// Apply the window policy for the table's timeframe and describe the result.
pub fn window(table: SeriesTable) -> WindowedSeries {
    let timeframe = table.timeframe();
    let bars = select(timeframe, table.into_bars());
    let description = describe(timeframe, &bars);
    WindowedSeries {
        timeframe,
        bars,
        description,
    }
}

/// `bars` must be ascending.
pub fn select(timeframe: Timeframe, mut bars: Vec<Bar>) -> Vec<Bar> {
    match timeframe {
        Timeframe::Intraday => {
            let Some(latest) = bars.last().map(|b| b.timestamp.date()) else {
                return bars;
            };
            bars.retain(|b| b.timestamp.date() == latest);
            bars
        }
        Timeframe::Weekly => keep_last(bars, WEEKLY_WINDOW),
        Timeframe::Monthly => keep_last(bars, MONTHLY_WINDOW),
    }
}

fn keep_last(mut bars: Vec<Bar>, n: usize) -> Vec<Bar> {
    let start = bars.len().saturating_sub(n);
    bars.drain(..start);
    bars
}

/// Sentence describing the span and size of an ascending window.
///
/// Empty windows describe as an empty string.
pub fn describe(timeframe: Timeframe, bars: &[Bar]) -> String {
    let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
        return String::new();
    };
    let n = bars.len();
    match timeframe {
        Timeframe::Intraday => format!(
            "the intraday trading session of {}",
            last.timestamp.format("%Y-%m-%d")
        ),
        Timeframe::Weekly => format!(
            "the daily trading data from {} to {} (last {n} trading days)",
            first.timestamp.format("%Y-%m-%d"),
            last.timestamp.format("%Y-%m-%d"),
        ),
        Timeframe::Monthly => format!(
            "the monthly trading data from {} to {} (last {n} months)",
            first.timestamp.format("%Y-%m"),
            last.timestamp.format("%Y-%m"),
        ),
    }
}
