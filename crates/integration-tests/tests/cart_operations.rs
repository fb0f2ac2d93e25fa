//! Cart semantics exercised through the session/handle API.
//!
//! These tests treat the library the way UI code does: one session per
//! test, handles injected into "components", and only the public
//! operations - add, increment, decrement, products.

use std::sync::Arc;

use marketplace_cart::config::CartConfig;
use marketplace_cart::error::CartError;
use marketplace_cart::session::CartSession;
use marketplace_cart::storage::MemoryStore;
use marketplace_core::ProductId;

use marketplace_integration_tests::product;

async fn fresh_session() -> CartSession {
    CartSession::open(Arc::new(MemoryStore::new()), &CartConfig::default()).await
}

// =============================================================================
// Quantity Semantics
// =============================================================================

#[tokio::test]
async fn test_add_to_empty_cart_yields_single_entry_with_quantity_one() {
    let session = fresh_session().await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");

    let items = cart.products().await.expect("products");
    assert_eq!(items.len(), 1);
    let item = items.first().expect("entry");
    assert_eq!(item.id, ProductId::new("p1"));
    assert_eq!(item.quantity, 1);
}

#[tokio::test]
async fn test_double_add_merges_into_one_entry_without_touching_others() {
    let session = fresh_session().await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");
    cart.add_to_cart(product("p2")).await.expect("add");
    cart.increment(&ProductId::new("p2")).await.expect("inc");

    cart.add_to_cart(product("p1")).await.expect("re-add");

    let items = cart.products().await.expect("products");
    assert_eq!(items.len(), 2);

    let quantity_of = |id: &str| {
        items
            .iter()
            .find(|item| item.id == ProductId::new(id))
            .map(|item| item.quantity)
    };
    assert_eq!(quantity_of("p1"), Some(2));
    // p2 keeps its prior quantity - a duplicate add must not reset others.
    assert_eq!(quantity_of("p2"), Some(2));
}

#[tokio::test]
async fn test_increment_missing_id_leaves_cart_unchanged() {
    let session = fresh_session().await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");
    let before = cart.products().await.expect("products");

    cart.increment(&ProductId::new("missing")).await.expect("inc");

    assert_eq!(cart.products().await.expect("products"), before);
}

#[tokio::test]
async fn test_decrement_at_quantity_one_removes_the_entry() {
    let session = fresh_session().await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");
    cart.add_to_cart(product("p2")).await.expect("add");

    cart.decrement(&ProductId::new("p1")).await.expect("dec");

    let items = cart.products().await.expect("products");
    assert_eq!(items.len(), 1);
    assert!(items.iter().all(|item| item.id != ProductId::new("p1")));
}

#[tokio::test]
async fn test_decrement_at_quantity_three_yields_two() {
    let session = fresh_session().await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");
    cart.add_to_cart(product("p2")).await.expect("add");
    cart.increment(&ProductId::new("p1")).await.expect("inc");
    cart.increment(&ProductId::new("p1")).await.expect("inc");

    cart.decrement(&ProductId::new("p1")).await.expect("dec");

    let items = cart.products().await.expect("products");
    let p1 = items
        .iter()
        .find(|item| item.id == ProductId::new("p1"))
        .expect("p1 present");
    let p2 = items
        .iter()
        .find(|item| item.id == ProductId::new("p2"))
        .expect("p2 present");
    assert_eq!(p1.quantity, 2);
    assert_eq!(p2.quantity, 1);
}

#[tokio::test]
async fn test_no_zero_quantity_entry_over_arbitrary_sequences() {
    let session = fresh_session().await;
    let cart = session.handle();

    let ids = ["a", "b", "c"];
    for id in ids {
        cart.add_to_cart(product(id)).await.expect("add");
    }
    for _ in 0..3 {
        for id in ids {
            cart.increment(&ProductId::new(id)).await.expect("inc");
        }
    }
    for _ in 0..5 {
        for id in ids {
            cart.decrement(&ProductId::new(id)).await.expect("dec");
        }
    }

    let items = cart.products().await.expect("products");
    assert!(items.iter().all(|item| item.quantity >= 1));
}

// =============================================================================
// Session Scoping
// =============================================================================

#[tokio::test]
async fn test_handles_share_one_authoritative_cart() {
    let session = fresh_session().await;
    let catalog_page = session.handle();
    let cart_badge = session.handle();

    catalog_page.add_to_cart(product("p1")).await.expect("add");
    catalog_page.increment(&ProductId::new("p1")).await.expect("inc");

    let seen = cart_badge.products().await.expect("products");
    assert_eq!(seen.first().map(|item| item.quantity), Some(2));
}

#[tokio::test]
async fn test_handle_outside_live_session_is_a_configuration_error() {
    let session = fresh_session().await;
    let cart = session.handle();
    drop(session);

    assert!(matches!(
        cart.products().await,
        Err(CartError::SessionClosed)
    ));
    assert!(matches!(
        cart.add_to_cart(product("p1")).await,
        Err(CartError::SessionClosed)
    ));
    assert!(matches!(
        cart.increment(&ProductId::new("p1")).await,
        Err(CartError::SessionClosed)
    ));
    assert!(matches!(
        cart.decrement(&ProductId::new("p1")).await,
        Err(CartError::SessionClosed)
    ));
}
