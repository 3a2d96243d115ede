//! Time-series acquisition for strategy generation.
//!
//! [`TimeSeriesAcquirer::fetch`] takes a ticker and one of three timeframes,
//! makes a single provider call, and returns a windowed OHLCV table rendered
//! as CSV together with a sentence describing its span.

pub mod acquirer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
pub mod io;
pub mod models;
pub mod providers;
pub mod strategy;
pub mod window;

pub use acquirer::TimeSeriesAcquirer;
pub use errors::AcquireError;
pub use models::{
    bar::Bar,
    series::{RenderedSeries, SeriesTable, WindowedSeries},
    timeframe::Timeframe,
};
