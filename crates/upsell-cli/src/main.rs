mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "upsell-cli")]
#[command(about = "Checkout upsell widget host")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the configured products and show them against the cart
    Show {
        /// Cart to check membership against (defaults to UPSELL_CART_ID)
        #[arg(long)]
        cart_id: Option<String>,
    },
    /// Add a product's selected variant to the cart
    Add {
        /// Product title as shown by `show`
        #[arg(long)]
        product: String,

        /// Variant to select before adding; defaults to the first variant
        #[arg(long)]
        variant: Option<String>,

        /// Cart to add to (defaults to UPSELL_CART_ID)
        #[arg(long)]
        cart_id: Option<String>,
    },
    /// Create an empty cart and print its id
    CreateCart,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = upsell_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Show { cart_id } => commands::show(&config, cart_id.as_deref()).await,
        Commands::Add {
            product,
            variant,
            cart_id,
        } => commands::add(&config, &product, variant.as_deref(), cart_id.as_deref()).await,
        Commands::CreateCart => commands::create_cart(&config).await,
    }
}
