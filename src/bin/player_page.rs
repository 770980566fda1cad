//! Fetch the data for one player page and print it as JSON.

use basketball_stats_api::{Config, PlayerPageLoader};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "player_page")]
#[command(about = "Load a player page from the stats API", long_about = None)]
struct Cli {
    /// Player identifier from the page route
    id: String,

    /// API base URL (defaults to PLAYERS_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let api_url = match cli.api_url {
        Some(url) => url,
        None => match Config::from_env() {
            Ok(config) => config.players_api_url,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let loader = PlayerPageLoader::new(api_url);
    match loader.load(&cli.id).await {
        Ok(page) => match serde_json::to_string_pretty(&page) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("{} {}", err.status().as_u16(), err);
            ExitCode::FAILURE
        }
    }
}
