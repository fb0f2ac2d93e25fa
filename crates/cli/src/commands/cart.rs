//! Cart inspection and mutation commands.
//!
//! # Usage
//!
//! ```bash
//! market-cli show
//! market-cli add --id p1 --title "Espresso Cup" \
//!     --image-url https://cdn.example.com/p1.png --price 12.50
//! market-cli increment p1
//! market-cli decrement p1
//! market-cli clear
//! ```
//!
//! # Environment Variables
//!
//! - `MARKETPLACE_DATA_DIR` - Directory holding the persisted cart record
//! - `MARKETPLACE_STORAGE_KEY` - Record key (default: `@marketplace:cart`)

use std::sync::Arc;

use thiserror::Error;

use marketplace_cart::config::{CartConfig, ConfigError};
use marketplace_cart::error::CartError;
use marketplace_cart::session::CartSession;
use marketplace_cart::storage::FileStore;
use marketplace_core::{NewCartItem, ProductId};

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
}

/// Open a session over the configured file-backed store.
async fn open_session() -> Result<CartSession, CommandError> {
    dotenvy::dotenv().ok();

    let config = CartConfig::from_env()?;
    let data_dir = config.require_data_dir()?.clone();

    tracing::debug!(data_dir = %data_dir.display(), "Opening file-backed cart session");
    let storage = Arc::new(FileStore::new(data_dir));
    Ok(CartSession::open(storage, &config).await)
}

/// Print the cart, one line per item.
#[allow(clippy::print_stdout)]
pub async fn show() -> Result<(), CommandError> {
    let session = open_session().await?;
    let items = session.store().products().await;

    if items.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for item in &items {
        println!(
            "{:>3} x {}  {}  ({})",
            item.quantity, item.title, item.price, item.id
        );
    }
    let cart = session.store().cart().await;
    println!(
        "{} distinct product(s), {} unit(s) total",
        cart.len(),
        cart.total_quantity()
    );
    Ok(())
}

/// Add a product to the cart (increments quantity when already present).
pub async fn add(product: NewCartItem) -> Result<(), CommandError> {
    let session = open_session().await?;
    let id = product.id.clone();
    session.store().add_to_cart(product).await?;

    let quantity = session
        .store()
        .cart()
        .await
        .get(&id)
        .map_or(0, |item| item.quantity);
    tracing::info!("Added {id}, quantity now {quantity}");
    Ok(())
}

/// Increase a line item's quantity by 1.
pub async fn increment(id: &ProductId) -> Result<(), CommandError> {
    let session = open_session().await?;
    session.store().increment(id).await?;

    match session.store().cart().await.get(id) {
        Some(item) => tracing::info!("Incremented {id}, quantity now {}", item.quantity),
        None => tracing::warn!("Product {id} is not in the cart; nothing changed"),
    }
    Ok(())
}

/// Decrease a line item's quantity by 1, removing it at quantity 1.
pub async fn decrement(id: &ProductId) -> Result<(), CommandError> {
    let session = open_session().await?;
    session.store().decrement(id).await?;

    match session.store().cart().await.get(id) {
        Some(item) => tracing::info!("Decremented {id}, quantity now {}", item.quantity),
        None => tracing::info!("Product {id} is no longer in the cart"),
    }
    Ok(())
}

/// Empty the cart.
pub async fn clear() -> Result<(), CommandError> {
    let session = open_session().await?;
    session.store().clear().await?;

    tracing::info!("Cart cleared");
    Ok(())
}
