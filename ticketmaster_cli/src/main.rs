mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ticketmaster_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ticketmaster")]
#[command(about = "Search events, venues and attractions on the Ticketmaster Discovery API")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Discovery API consumer key
    #[arg(long, env = "TICKETMASTER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search events
    Events(Box<commands::events::EventsArgs>),
    /// Search venues
    Venues(commands::venues::VenuesArgs),
    /// Search attractions (performers, teams)
    Attractions(commands::attractions::AttractionsArgs),
    /// Search classifications or look one up by ID
    Classifications(commands::classifications::ClassificationsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticketmaster=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let api_key = cli
        .api_key
        .context("No API key: pass --api-key or set TICKETMASTER_API_KEY")?;
    let config = ClientConfig::new(&api_key).with_timeout(Duration::from_secs(cli.timeout));
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Events(args) => commands::events::run(args.as_ref(), &client, &format).await?,
        Commands::Venues(args) => commands::venues::run(args, &client, &format).await?,
        Commands::Attractions(args) => {
            commands::attractions::run(args, &client, &format).await?
        }
        Commands::Classifications(args) => {
            commands::classifications::run(args, &client, &format).await?
        }
    }

    Ok(())
}
