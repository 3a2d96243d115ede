//! Request-scoped series containers: the full normalized table, its window,
//! and the rendered hand-off value.

use crate::models::{bar::Bar, timeframe::Timeframe};

/// Normalized bars for one fetch: ascending by timestamp, one bar per
/// timestamp, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    timeframe: Timeframe,
    bars: Vec<Bar>,
}

impl SeriesTable {
    /// Sort ascending and drop repeated timestamps (first occurrence kept).
    ///
    /// Returns `None` when there are no bars.
    pub fn new(timeframe: Timeframe, mut bars: Vec<Bar>) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by_key(|b| b.timestamp);
        Some(Self { timeframe, bars })
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}

/// The timeframe-specific slice of a [`SeriesTable`] plus its description.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    pub timeframe: Timeframe,
    pub bars: Vec<Bar>,
    /// Human-readable summary of the window's span and size.
    pub description: String,
}

impl WindowedSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// What the strategy prompt builder consumes: a literal data block and the
/// sentence describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSeries {
    pub ticker: String,
    pub timeframe: Timeframe,
    pub description: String,
    /// CSV block with a header row.
    pub table: String,
    pub rows: usize,
}
