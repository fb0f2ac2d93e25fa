//! Persisted-record behavior across stores, restarts, and failures.

use std::sync::Arc;

use marketplace_cart::config::CartConfig;
use marketplace_cart::error::CartError;
use marketplace_cart::session::CartSession;
use marketplace_cart::storage::{FileStore, KeyValueStore, MemoryStore};
use marketplace_core::{Cart, ProductId};

use marketplace_integration_tests::product;

// =============================================================================
// Restart Round-Trips
// =============================================================================

#[tokio::test]
async fn test_cart_survives_restart_on_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = CartConfig::default();

    {
        let storage = Arc::new(FileStore::new(dir.path()));
        let session = CartSession::open(storage, &config).await;
        let cart = session.handle();
        cart.add_to_cart(product("p1")).await.expect("add");
        cart.add_to_cart(product("p2")).await.expect("add");
        cart.increment(&ProductId::new("p1")).await.expect("inc");
    }

    // A fresh session over the same directory sees the same cart.
    let storage = Arc::new(FileStore::new(dir.path()));
    let session = CartSession::open(storage, &config).await;
    let items = session.handle().products().await.expect("products");

    assert_eq!(items.len(), 2);
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2"]);
    assert_eq!(items.first().map(|item| item.quantity), Some(2));
}

#[tokio::test]
async fn test_restart_preserves_field_values_and_order() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let config = CartConfig::default();

    let expected = {
        let session = CartSession::open(Arc::clone(&storage), &config).await;
        let cart = session.handle();
        cart.add_to_cart(product("b")).await.expect("add");
        cart.add_to_cart(product("a")).await.expect("add");
        cart.add_to_cart(product("b")).await.expect("re-add");
        cart.products().await.expect("products")
    };

    let session = CartSession::open(storage, &config).await;
    let restored = session.handle().products().await.expect("products");

    assert_eq!(restored, expected);
}

// =============================================================================
// Degraded Loads
// =============================================================================

#[tokio::test]
async fn test_missing_record_loads_as_empty_cart() {
    let session =
        CartSession::open(Arc::new(MemoryStore::new()), &CartConfig::default()).await;
    assert!(session.handle().products().await.expect("products").is_empty());
}

#[tokio::test]
async fn test_corrupt_record_loads_as_empty_cart() {
    let config = CartConfig::default();
    for corrupt in ["not json at all", "{\"cart\": 1}", "[{\"id\": 7}]"] {
        let storage = Arc::new(MemoryStore::with_entry(&config.storage_key, corrupt));
        let session = CartSession::open(storage, &config).await;
        assert!(
            session.handle().products().await.expect("products").is_empty(),
            "record {corrupt:?} should load as empty"
        );
    }
}

#[tokio::test]
async fn test_corrupt_record_is_replaced_by_next_mutation() {
    let config = CartConfig::default();
    let storage: Arc<dyn KeyValueStore> =
        Arc::new(MemoryStore::with_entry(&config.storage_key, "{corrupt"));

    let session = CartSession::open(Arc::clone(&storage), &config).await;
    session.handle().add_to_cart(product("p1")).await.expect("add");

    let record = storage
        .get(&config.storage_key)
        .await
        .expect("get")
        .expect("record");
    let persisted = Cart::from_json(&record).expect("parse");
    assert_eq!(persisted.len(), 1);
}

// =============================================================================
// Storage Failures
// =============================================================================

#[tokio::test]
async fn test_write_failure_surfaces_without_rollback() {
    let storage = Arc::new(MemoryStore::new());
    let session = CartSession::open(storage.clone(), &CartConfig::default()).await;
    let cart = session.handle();

    cart.add_to_cart(product("p1")).await.expect("add");

    storage.fail_next_set();
    let result = cart.increment(&ProductId::new("p1")).await;
    assert!(matches!(result, Err(CartError::Storage(_))));

    // The in-memory cart kept the increment...
    let items = cart.products().await.expect("products");
    assert_eq!(items.first().map(|item| item.quantity), Some(2));

    // ...and the next successful mutation persists the full state.
    cart.increment(&ProductId::new("p1")).await.expect("inc");
    let record = storage
        .get(&CartConfig::default().storage_key)
        .await
        .expect("get")
        .expect("record");
    let persisted = Cart::from_json(&record).expect("parse");
    assert_eq!(persisted.total_quantity(), 3);
}

// =============================================================================
// Write Ordering
// =============================================================================

#[tokio::test]
async fn test_rapid_mutations_leave_record_matching_final_state() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let config = CartConfig::default();
    let session = Arc::new(CartSession::open(Arc::clone(&storage), &config).await);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..8 {
        let cart = session.handle();
        tasks.spawn(async move {
            let id = format!("p{}", i % 4);
            cart.add_to_cart(product(&id)).await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("join").expect("add");
    }

    let record = storage
        .get(&config.storage_key)
        .await
        .expect("get")
        .expect("record");
    let persisted = Cart::from_json(&record).expect("parse");

    let in_memory = session.handle().products().await.expect("products");
    assert_eq!(persisted.items(), in_memory.as_slice());
    assert_eq!(persisted.total_quantity(), 8);
}
