//! Strategy-generation hand-off: message assembly for the text-generation
//! service and cleanup of what it sends back. The service call itself lives
//! with the caller.

pub mod prompt;

pub use prompt::{ChatMessage, Role, StrategyPrompt, clean_response};
