use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Fetch windowed market data for strategy generation")]
pub struct Cli {
    /// Path to the config file (acquirer.toml); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Stock ticker symbol (e.g. "IBM")
    #[arg(long)]
    pub ticker: String,

    /// Strategy timeframe: intraday, weekly or monthly
    #[arg(long, default_value = "weekly")]
    pub timeframe: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the window description followed by the CSV data block
    Fetch(Target),

    /// Print the strategy-generation chat messages as JSON
    Prompt(Target),
}
