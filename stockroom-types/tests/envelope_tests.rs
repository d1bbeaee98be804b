use stockroom_types::{Envelope, Item};

// ── Constructors and predicates ──────────────────────────────────

#[test]
fn ok_envelope_is_ok() {
    let env = Envelope::ok(42);
    assert!(env.is_ok());
    assert!(!env.is_err());
}

#[test]
fn err_envelope_is_err() {
    let env: Envelope<i32> = Envelope::err("Item not found");
    assert!(env.is_err());
    assert!(!env.is_ok());
}

// ── into_result ──────────────────────────────────────────────────

#[test]
fn ok_envelope_unwraps_to_ok() {
    let env = Envelope::ok(Item::new("Bolt", 3));
    let item = env.into_result().unwrap();
    assert_eq!(item.name, "Bolt");
}

#[test]
fn err_envelope_unwraps_to_err_with_message() {
    let env: Envelope<Item> = Envelope::err("storage quota exceeded");
    assert_eq!(env.into_result().unwrap_err(), "storage quota exceeded");
}

// ── map ──────────────────────────────────────────────────────────

#[test]
fn map_transforms_success_payload() {
    let env = Envelope::ok(2).map(|n| n * 10);
    assert_eq!(env.into_result().unwrap(), 20);
}

#[test]
fn map_leaves_failure_untouched() {
    let env: Envelope<i32> = Envelope::err("boom");
    let mapped = env.map(|n| n * 10);
    assert_eq!(mapped.into_result().unwrap_err(), "boom");
}

// ── Serialized shape ─────────────────────────────────────────────

#[test]
fn ok_envelope_serializes_with_data_field() {
    let env = Envelope::ok(5);
    let value = serde_json::to_value(&env).unwrap();
    assert_eq!(value["data"], 5);
}

#[test]
fn err_envelope_serializes_with_error_field() {
    let env: Envelope<i32> = Envelope::err("Item not found");
    let value = serde_json::to_value(&env).unwrap();
    assert_eq!(value["error"], "Item not found");
}
