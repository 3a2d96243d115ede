use std::process::ExitCode;

use clap::Parser;
use secrecy::SecretString;
use series_acquirer::{
    TimeSeriesAcquirer,
    cli::commands::{Cli, Commands},
    providers::alpha_vantage::AlphaVantageProvider,
    strategy::StrategyPrompt,
};
use shared_utils::{
    config::{AcquirerConfig, load_config},
    env::get_env_var,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    // A missing .env is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AcquirerConfig::default(),
    };
    let api_key = SecretString::from(get_env_var(&config.api_key_env)?);
    let provider = AlphaVantageProvider::from_config(api_key, &config)?;
    let acquirer = TimeSeriesAcquirer::new(provider);

    match cli.command {
        Commands::Fetch(target) => {
            let rendered = acquirer.fetch(&target.ticker, &target.timeframe).await?;
            println!("# {}", rendered.description);
            print!("{}", rendered.table);
        }
        Commands::Prompt(target) => {
            let rendered = acquirer.fetch(&target.ticker, &target.timeframe).await?;
            let messages = StrategyPrompt::new(&rendered).messages();
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
    }
    Ok(())
}
