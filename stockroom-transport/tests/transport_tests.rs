use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use stockroom_store::{InventoryRecord, KeyValueStore, MemoryStore, RECORD_KEY};
use stockroom_transport::{ITEMS_PATH, Method, MockTransport, TransportConfig, item_path};
use stockroom_types::{Envelope, Item, ItemId};

/// Transport over a fresh in-memory store with zero latency.
fn transport() -> (Arc<MemoryStore>, MockTransport<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let record = InventoryRecord::new(store.clone());
    let config = TransportConfig {
        latency: Duration::ZERO,
    };
    (store, MockTransport::with_config(record, config))
}

fn unwrap_item(envelope: Envelope<Value>) -> Item {
    serde_json::from_value(envelope.into_result().unwrap()).unwrap()
}

fn stored_items(store: &MemoryStore) -> Vec<Item> {
    let raw = store.get(RECORD_KEY).unwrap().unwrap_or_else(|| "[]".into());
    serde_json::from_str(&raw).unwrap()
}

// ── GET ──────────────────────────────────────────────────────────

#[tokio::test]
async fn get_on_empty_store_returns_empty_collection() {
    let (_, transport) = transport();
    let envelope = transport.request(Method::Get, ITEMS_PATH, None).await;
    assert_eq!(envelope.into_result().unwrap(), json!([]));
}

#[tokio::test]
async fn get_returns_full_collection_in_order() {
    let (_, transport) = transport();
    let a = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );
    let b = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Nut", "quantity": 2})))
            .await,
    );

    let envelope = transport.request(Method::Get, ITEMS_PATH, None).await;
    let items: Vec<Item> = serde_json::from_value(envelope.into_result().unwrap()).unwrap();
    assert_eq!(items, vec![a, b]);
}

#[tokio::test]
async fn get_treats_corrupt_record_as_empty() {
    let (store, transport) = transport();
    store.set(RECORD_KEY, "{corrupt").unwrap();
    let envelope = transport.request(Method::Get, ITEMS_PATH, None).await;
    assert_eq!(envelope.into_result().unwrap(), json!([]));
}

// ── POST ─────────────────────────────────────────────────────────

#[tokio::test]
async fn post_assigns_id_and_persists() {
    let (store, transport) = transport();
    let created = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Nut", "quantity": 10})))
            .await,
    );
    assert_eq!(created.name, "Nut");
    assert_eq!(created.quantity, 10);
    assert_eq!(stored_items(&store), vec![created]);
}

#[tokio::test]
async fn consecutive_posts_never_collide() {
    let (_, transport) = transport();
    let body = json!({"name": "Bolt", "quantity": 1});
    let a = unwrap_item(transport.request(Method::Post, ITEMS_PATH, Some(body.clone())).await);
    let b = unwrap_item(transport.request(Method::Post, ITEMS_PATH, Some(body)).await);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn post_without_body_fails_in_envelope() {
    let (store, transport) = transport();
    let envelope = transport.request(Method::Post, ITEMS_PATH, None).await;
    assert!(envelope.is_err());
    assert!(stored_items(&store).is_empty());
}

#[tokio::test]
async fn post_with_malformed_body_fails_in_envelope() {
    let (_, transport) = transport();
    let envelope = transport
        .request(Method::Post, ITEMS_PATH, Some(json!({"quantity": "many"})))
        .await;
    assert!(envelope.is_err());
}

#[tokio::test]
async fn post_storage_failure_is_caught_in_envelope() {
    let (store, transport) = transport();
    store.fail_next_set();
    let envelope = transport
        .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
        .await;
    let error = envelope.into_result().unwrap_err();
    assert!(error.contains("quota"), "unexpected message: {error}");
}

// ── PUT ──────────────────────────────────────────────────────────

#[tokio::test]
async fn put_missing_item_returns_not_found() {
    let (_, transport) = transport();
    let id = ItemId::new();
    let envelope = transport
        .request(
            Method::Put,
            &item_path(id),
            Some(json!({"id": id.to_string(), "quantity": 5})),
        )
        .await;
    assert_eq!(envelope.into_result().unwrap_err(), "Item not found");
}

#[tokio::test]
async fn put_quantity_only_preserves_name() {
    let (store, transport) = transport();
    let created = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );

    let merged = unwrap_item(
        transport
            .request(
                Method::Put,
                &item_path(created.id),
                Some(json!({"id": created.id.to_string(), "quantity": 5})),
            )
            .await,
    );
    assert_eq!(merged.name, "Bolt");
    assert_eq!(merged.quantity, 5);
    assert_eq!(stored_items(&store), vec![merged]);
}

#[tokio::test]
async fn put_replaces_all_given_fields() {
    let (_, transport) = transport();
    let created = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );

    let merged = unwrap_item(
        transport
            .request(
                Method::Put,
                &item_path(created.id),
                Some(json!({"id": created.id.to_string(), "name": "Hex Bolt", "quantity": 7})),
            )
            .await,
    );
    assert_eq!(merged.name, "Hex Bolt");
    assert_eq!(merged.quantity, 7);
    assert_eq!(merged.id, created.id);
}

// ── DELETE ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_item_and_persists() {
    let (store, transport) = transport();
    let created = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );

    let envelope = transport
        .request(Method::Delete, &item_path(created.id), None)
        .await;
    assert!(envelope.is_ok());
    assert!(stored_items(&store).is_empty());
}

#[tokio::test]
async fn delete_absent_id_is_idempotent_success() {
    let (store, transport) = transport();
    let created = unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );

    let envelope = transport
        .request(Method::Delete, &item_path(ItemId::new()), None)
        .await;
    assert!(envelope.is_ok());
    assert_eq!(stored_items(&store), vec![created]);
}

#[tokio::test]
async fn delete_with_garbage_segment_matches_nothing() {
    let (store, transport) = transport();
    unwrap_item(
        transport
            .request(Method::Post, ITEMS_PATH, Some(json!({"name": "Bolt", "quantity": 1})))
            .await,
    );

    let envelope = transport
        .request(Method::Delete, "/api/items/not-a-real-id", None)
        .await;
    assert!(envelope.is_ok());
    assert_eq!(stored_items(&store).len(), 1);
}

// ── Paths and latency ────────────────────────────────────────────

#[tokio::test]
async fn unknown_path_fails_in_envelope() {
    let (_, transport) = transport();
    let envelope = transport.request(Method::Get, "/api/orders", None).await;
    assert!(envelope.is_err());
}

#[tokio::test(start_paused = true)]
async fn request_resolves_only_after_latency() {
    let store = Arc::new(MemoryStore::new());
    let record = InventoryRecord::new(store);
    let transport = MockTransport::new(record); // 150 ms default

    let mut fut = Box::pin(transport.request(Method::Get, ITEMS_PATH, None));

    // One tick short of the latency: still pending.
    let early = tokio::time::timeout(Duration::from_millis(149), &mut fut).await;
    assert!(early.is_err());

    // Past the latency: resolves.
    let envelope = tokio::time::timeout(Duration::from_millis(10), &mut fut)
        .await
        .expect("request should resolve once latency elapsed");
    assert!(envelope.is_ok());
}
