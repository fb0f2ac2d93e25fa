//! Marketplace CLI - cart inspection and management tools.
//!
//! Operates on the same file-backed cart record the app persists, which
//! makes it useful for support and for poking at a device image pulled
//! into a local directory.
//!
//! # Usage
//!
//! ```bash
//! # Print the cart stored under $MARKETPLACE_DATA_DIR
//! market-cli show
//!
//! # Add a product (increments quantity if already in the cart)
//! market-cli add --id p1 --title "Espresso Cup" \
//!     --image-url https://cdn.example.com/p1.png --price 12.50
//!
//! # Bump quantities
//! market-cli increment p1
//! market-cli decrement p1
//!
//! # Empty the cart
//! market-cli clear
//! ```
//!
//! # Commands
//!
//! - `show` - Print the cart
//! - `add` - Add a product to the cart
//! - `increment` / `decrement` - Adjust a line item's quantity
//! - `clear` - Empty the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use marketplace_core::{NewCartItem, Price, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "market-cli")]
#[command(author, version, about = "Marketplace cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart
    Show,
    /// Add a product to the cart
    Add {
        /// Catalog product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        title: String,

        /// Product image URL
        #[arg(long)]
        image_url: String,

        /// Unit price (e.g. 12.50)
        #[arg(long)]
        price: Price,
    },
    /// Increase a line item's quantity by 1
    Increment {
        /// Catalog product id
        id: String,
    },
    /// Decrease a line item's quantity by 1 (removes the item at quantity 1)
    Decrement {
        /// Catalog product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketplace_cart=info,marketplace_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show => commands::cart::show().await?,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => {
            commands::cart::add(NewCartItem {
                id: ProductId::new(id),
                title,
                image_url,
                price,
            })
            .await?;
        }
        Commands::Increment { id } => commands::cart::increment(&ProductId::new(id)).await?,
        Commands::Decrement { id } => commands::cart::decrement(&ProductId::new(id)).await?,
        Commands::Clear => commands::cart::clear().await?,
    }
    Ok(())
}
