use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::series::RenderedSeries;

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think-block regex"));
static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[1-3]\]").expect("valid citation regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One chat-completions message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// System and user messages asking for a strategy grounded only in the
/// supplied data block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyPrompt {
    pub ticker: String,
    pub description: String,
    pub data: String,
}

impl StrategyPrompt {
    pub fn new(series: &RenderedSeries) -> Self {
        Self {
            ticker: series.ticker.clone(),
            description: series.description.clone(),
            data: series.table.clone(),
        }
    }

    pub fn system(&self) -> String {
        format!(
            "Role: quantitative strategist working from short-horizon price data.\n\
             Task: study the OHLCV data for {ticker}, covering {description}, and propose one \
             concise, actionable trading strategy.\n\
             The strategy must state:\n\
             1. Entry condition(s): price levels, patterns or simple indicator signals visible in the data.\n\
             2. Take-profit exit: a price target or condition.\n\
             3. Stop-loss exit: a price level or condition.\n\
             4. Holding period consistent with the timeframe.\n\
             Optionally add a one or two sentence rationale tied to patterns in the data.\n\
             Constraints: use only the supplied data, no outside information; assume no open positions.",
            ticker = self.ticker,
            description = self.description,
        )
    }

    pub fn user(&self) -> String {
        format!(
            "Trading strategy request\n\n\
             Ticker: {ticker}\n\
             Timeframe: {description}\n\n\
             Historical data (CSV):\n{data}\n\
             Generate the strategy from the data above only, following the system instructions.",
            ticker = self.ticker,
            description = self.description,
            data = self.data,
        )
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: Role::System,
                content: self.system(),
            },
            ChatMessage {
                role: Role::User,
                content: self.user(),
            },
        ]
    }
}

/// Strip reasoning blocks and `[1]`–`[3]` citation markers from a model reply.
pub fn clean_response(text: &str) -> String {
    let without_thinking = THINK_BLOCK.replace_all(text, "");
    CITATION.replace_all(&without_thinking, "").trim().to_string()
}
