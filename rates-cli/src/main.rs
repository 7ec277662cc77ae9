//! Currency CLI
//!
//! Converts amounts between currencies using rates from a remote API,
//! cached in a local snapshot file after the first successful fetch.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rates_client::RatesClient;
use rates_hex::{ConversionService, RateService, inbound::Shell};
use rates_repo::{DEFAULT_CONFIG_FILE, DEFAULT_SNAPSHOT_FILE, JsonConfigStore, JsonRateStore};
use rates_types::ExchangeRateTable;

type Service = RateService<JsonConfigStore, JsonRateStore, RatesClient>;

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency converter with a cached rate snapshot", long_about = None)]
struct Cli {
    /// Path of the API config file
    #[arg(long, env = "RATES_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Path of the rate snapshot file
    #[arg(long, env = "RATES_SNAPSHOT_FILE", default_value = DEFAULT_SNAPSHOT_FILE)]
    snapshot: PathBuf,

    /// Emit logs as JSON
    #[arg(long, env = "RATES_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Interactive converter (default)
    Shell,
    /// Convert a single amount
    Convert {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every known currency with its rate
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch fresh rates and overwrite the snapshot
    Refresh,
    /// Write the API config file
    Init {
        /// Endpoint returning `{"rates": {...}}`
        #[arg(long)]
        api_url: String,
        /// App id sent as the `app_id` query parameter
        #[arg(long)]
        api_id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let service = RateService::new(
        JsonConfigStore::new(&cli.config),
        JsonRateStore::new(&cli.snapshot),
        RatesClient::new(),
    );

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let conversions = ConversionService::new(load_rates(&service).await?);
            let stdin = std::io::stdin();
            Shell::new(&conversions, stdin.lock(), std::io::stdout()).run()?;
        }

        Commands::Convert {
            from,
            to,
            amount,
            json,
        } => {
            let conversions = ConversionService::new(load_rates(&service).await?);
            let conversion = conversions.convert_input(&from, &to, &amount)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&conversion)?);
            } else {
                println!("{}", conversion);
            }
        }

        Commands::List { json } => {
            let table = load_rates(&service).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for (code, rate) in table.iter() {
                    println!("{}: {}", code, rate);
                }
            }
        }

        Commands::Refresh => {
            let config = service
                .load_config()
                .with_context(|| format!("Could not load {}", cli.config.display()))?;
            let table = service
                .refresh(&config)
                .await
                .with_context(|| format!("Could not refresh {}", cli.snapshot.display()))?;
            println!(
                "✓ Fetched {} rates into {}",
                table.len(),
                cli.snapshot.display()
            );
        }

        Commands::Init { api_url, api_id } => {
            service
                .init_config(&api_url, &api_id)
                .with_context(|| format!("Could not write {}", cli.config.display()))?;
            println!("✓ Wrote {}", cli.config.display());
        }
    }

    Ok(())
}

async fn load_rates(service: &Service) -> Result<ExchangeRateTable> {
    service
        .startup()
        .await
        .context("Exchange rates not available")
}
