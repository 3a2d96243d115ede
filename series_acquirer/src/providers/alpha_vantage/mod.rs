pub mod provider;
pub mod response;

pub use provider::AlphaVantageProvider;
pub use response::{DecodeError, RawRows, RawSeriesEnvelope};
