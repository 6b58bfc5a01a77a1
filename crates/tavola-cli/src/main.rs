use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tavola_core::search::SearchFilters;
use tavola_interaction::{HttpApiClient, load_client_config};

mod commands;

#[derive(Parser)]
#[command(name = "tavola")]
#[command(about = "Tavola CLI - find restaurants, chat with the assistant and book tables", long_about = None)]
struct Cli {
    /// Restaurant service base URL (overrides config file and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search restaurants with optional filters
    Search(SearchArgs),
    /// Show a restaurant's existing reservations as calendar events
    Reservations {
        restaurant_id: i64,
        /// Window start (ISO 8601, offset allowed); requires --end
        #[arg(long, requires = "end")]
        start: Option<String>,
        /// Window end (ISO 8601, offset allowed); requires --start
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
    /// Book a time range at a restaurant
    Book {
        restaurant_id: i64,
        /// Selection start, as the calendar would emit it
        #[arg(long)]
        start: String,
        /// Selection end
        #[arg(long)]
        end: String,
        /// Name on the reservation
        #[arg(long)]
        name: String,
        /// Number of guests
        #[arg(long, default_value_t = 1)]
        guests: u32,
    },
    /// Start an interactive conversation with the assistant
    Chat,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    name: Option<String>,
    /// Minimum rating (1-5)
    #[arg(long)]
    rating: Option<u32>,
    /// Maximum distance
    #[arg(long)]
    distance: Option<u32>,
    /// Maximum price
    #[arg(long)]
    price: Option<u32>,
    #[arg(long)]
    cuisine: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
}

impl From<SearchArgs> for SearchFilters {
    fn from(args: SearchArgs) -> Self {
        Self {
            name: args.name,
            rating: args.rating,
            distance: args.distance,
            price: args.price,
            cuisine: args.cuisine,
            limit: args.limit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with rendered output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = load_client_config()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Client configured");
    let client = HttpApiClient::new(&config)?;

    match cli.command {
        Commands::Search(args) => commands::search::run(client, args.into()).await?,
        Commands::Reservations {
            restaurant_id,
            start,
            end,
        } => commands::reservations::run(client, restaurant_id, start.zip(end)).await?,
        Commands::Book {
            restaurant_id,
            start,
            end,
            name,
            guests,
        } => {
            commands::book::run(
                client,
                restaurant_id,
                commands::book::BookingRequest {
                    start,
                    end,
                    name,
                    guests,
                },
            )
            .await?
        }
        Commands::Chat => commands::chat::run(client).await?,
    }

    Ok(())
}
