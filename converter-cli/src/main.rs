//! # Converter CLI
//!
//! Binary that wires together all the components:
//! - Load configuration from environment/arguments
//! - Initialize the preference store adapter
//! - Create the conversion engine over the HTTP rate provider
//! - Run a one-shot command or the interactive session

mod session;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_engine::{ConversionEngine, format_amount};
use converter_provider::{DEFAULT_API_URL, ExchangeRateClient};
use converter_store::build_store;
use converter_types::CurrencyCode;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Live currency conversion tool", long_about = None)]
struct Cli {
    /// Base URL of the exchange-rate API
    #[arg(long, env = "EXCHANGE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// API key for the exchange-rate API
    #[arg(long, env = "EXCHANGE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Preference store URL (`sqlite:...` or `memory:`)
    #[arg(
        long,
        env = "PREFERENCES_URL",
        default_value = "sqlite://converter-prefs.db?mode=rwc"
    )]
    preferences_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        #[arg(long, default_value = "USD")]
        from: String,
        /// Target currency code
        #[arg(long, default_value = "INR")]
        to: String,
    },
    /// Print the full rate table for a base currency
    Rates {
        /// Base currency code
        #[arg(long, default_value = "USD")]
        base: String,
    },
    /// Run the interactive conversion session (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,converter_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let provider = ExchangeRateClient::new(&cli.api_url, &cli.api_key);
    let mut engine = ConversionEngine::new(provider);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Convert { amount, from, to } => {
            let from = CurrencyCode::new(&from)?;
            let to = CurrencyCode::new(&to)?;
            let conversion = engine.convert_input(&amount, &from, &to).await?;
            println!("{}", conversion.converted_amount());
            println!("{}", conversion.rate_line());
        }
        Commands::Rates { base } => {
            let base = CurrencyCode::new(&base)?;
            let table = engine.refresh(&base).await?;
            println!("Base: {} (fetched {})", table.base(), table.fetched_at());
            for code in table.codes() {
                if let Some(rate) = table.rate(&code) {
                    println!("{code}  {}", format_amount(rate));
                }
            }
        }
        Commands::Interactive => {
            let store = build_store(&cli.preferences_url).await?;
            session::run(engine, store).await?;
        }
    }

    Ok(())
}
