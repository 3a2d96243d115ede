pub mod bar;
pub mod request_params;
pub mod series;
pub mod timeframe;
