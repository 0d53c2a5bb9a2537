use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod storage;
mod utils;

use api::GeminiClient;
use models::{PriceHistory, TripQuote, TripRequest, DEFAULT_CAPACITY};
use storage::HistoryStore;

#[derive(Parser)]
#[command(
    name = "tripquote",
    version,
    about = "Travel quote assistant with a rolling price history"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search flights and hotels for a trip
    Quote(QuoteArgs),
    /// Show the recorded price history
    History,
    /// Render the price history as a PNG chart
    Chart {
        #[arg(long, default_value = "price_history.png")]
        output: PathBuf,
        #[arg(long, default_value_t = 1024)]
        width: u32,
        #[arg(long, default_value_t = 768)]
        height: u32,
    },
    /// Export the full history as CSV, one row per flight leg
    Export {
        #[arg(long, default_value = "price_history.csv")]
        output: PathBuf,
    },
    /// Print a shareable summary of the latest search
    Share,
}

#[derive(Args)]
struct QuoteArgs {
    /// Origin airport or city code
    #[arg(long)]
    from: String,
    /// Destination airport or city code
    #[arg(long)]
    to: String,
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    depart: NaiveDate,
    /// Return date (YYYY-MM-DD); omit for a one-way trip
    #[arg(long)]
    ret: Option<NaiveDate>,
    #[arg(long, default_value_t = 1)]
    travelers: u32,
    #[arg(long, default_value = "USD")]
    currency: String,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tripquote=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!("🧳 tripquote — travel quotes with a rolling price history");

    let store = HistoryStore::from_env();
    let mut history: PriceHistory<TripQuote> = store.load(DEFAULT_CAPACITY);

    let result = match cli.command {
        Command::Quote(args) => {
            let api_key = match std::env::var("GEMINI_API_KEY") {
                Ok(key) => key,
                Err(_) => {
                    error!("GEMINI_API_KEY not set (put it in .env)");
                    std::process::exit(1);
                }
            };
            let client = GeminiClient::new(api_key);
            let request = TripRequest {
                origin: args.from,
                destination: args.to,
                depart: args.depart,
                ret: args.ret,
                travelers: args.travelers,
                currency: args.currency,
            };
            commands::quote::execute(&client, &store, &mut history, request).await
        }
        Command::History => commands::history::execute(&history),
        Command::Chart {
            output,
            width,
            height,
        } => commands::chart::execute(&history, &output, width, height),
        Command::Export { output } => commands::export::execute(&history, &output),
        Command::Share => commands::share::execute(&history),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
