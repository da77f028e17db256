//! End-to-end cart flows against in-memory and file-backed storage.

use std::sync::Arc;
use stride_cache::{FileStore, MemoryStore};
use stride_cart::prelude::*;
use stride_cart::testing::{RecordingNotifier, StaticInventory};

fn shoe() -> Product {
    Product {
        id: ProductId::new(5),
        name: "Shoe".to_string(),
        price_cents: 13999,
        image_url: Some("https://cdn.example/shoe.jpg".to_string()),
    }
}

fn catalog() -> StaticInventory {
    StaticInventory::new().with_product(shoe(), 2)
}

#[tokio::test]
async fn add_then_update_then_remove() {
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::open(
        Arc::new(catalog()),
        notifier.clone(),
        Arc::new(MemoryStore::new()),
        CartConfig::default(),
    );

    // empty cart + add(5) -> one entry, amount 1, display fields copied
    store.add_product(ProductId::new(5)).await;
    let entries = store.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, ProductId::new(5));
    assert_eq!(entries[0].name, "Shoe");
    assert_eq!(entries[0].amount, 1);

    // update to 3 with stock 2 -> rejected, cart unchanged, user notified
    store.update_product_amount(ProductId::new(5), 3).await;
    assert_eq!(store.entries(), entries);
    assert_eq!(
        notifier.messages(),
        vec!["Requested quantity is out of stock".to_string()]
    );

    // update to 2 is within stock
    store.update_product_amount(ProductId::new(5), 2).await;
    assert_eq!(store.entries()[0].amount, 2);

    // remove(5) -> empty; removing again stays silent
    store.remove_product(ProductId::new(5)).await;
    assert!(store.is_empty());
    store.remove_product(ProductId::new(5)).await;
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn cart_survives_reopen_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    {
        let store = CartStore::open(
            Arc::new(catalog()),
            Arc::new(RecordingNotifier::new()),
            Arc::new(FileStore::open(&path).unwrap()),
            CartConfig::default(),
        );
        store.add_product(ProductId::new(5)).await;
        store.update_product_amount(ProductId::new(5), 2).await;
        assert_eq!(store.item_count(), 2);
    }

    // new session, same file: state restored without any network call
    let store = CartStore::open(
        Arc::new(StaticInventory::new()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(FileStore::open(&path).unwrap()),
        CartConfig::default(),
    );
    let entries = store.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Shoe");
    assert_eq!(entries[0].amount, 2);
}

#[tokio::test]
async fn subscription_tracks_committed_mutations_only() {
    let store = CartStore::open(
        Arc::new(catalog()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(MemoryStore::new()),
        CartConfig::default(),
    );
    let mut updates = store.subscribe();

    store.add_product(ProductId::new(5)).await;
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update()[0].amount, 1);

    // rejected mutation: subscribers see nothing
    store.update_product_amount(ProductId::new(5), 100).await;
    assert!(!updates.has_changed().unwrap());

    // failed add on an unknown product: subscribers see nothing
    store.add_product(ProductId::new(404)).await;
    assert!(!updates.has_changed().unwrap());
}
