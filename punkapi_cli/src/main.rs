mod commands;
mod config;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "punkapi")]
#[command(about = "Query the Punk API beer catalog")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key, sent as Basic auth user and password (falls back to PUNKAPI_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API host (falls back to PUNKAPI_BASE_URL, then https://api.punkapi.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API version; v1 is retired
    #[arg(long, default_value = "v2", global = true)]
    api_version: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List beers matching the given filters
    Beers(commands::beers::BeersArgs),
    /// Look up a single beer by id
    Beer(commands::beer::BeerArgs),
    /// Fetch a random beer
    Random,
    /// Print the URL a `beers` query would request, without sending it
    Endpoint(commands::endpoint::EndpointArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("punkapi=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format: OutputFormat = cli.output.parse()?;
    let settings = Settings::resolve(
        cli.api_key.as_deref(),
        cli.base_url.as_deref(),
        &cli.api_version,
        cli.timeout,
    )?;
    let api = settings.build_api()?;

    match &cli.command {
        Commands::Beers(args) => commands::beers::run(args, api, &format).await?,
        Commands::Beer(args) => commands::beer::run(args, api, &format).await?,
        Commands::Random => commands::random::run(api, &format).await?,
        Commands::Endpoint(args) => commands::endpoint::run(args, api)?,
    }

    Ok(())
}
