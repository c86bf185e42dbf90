// tests/store_tests.rs
mod common;

use common::*;
use serial_test::serial;
use sharehub::model::{Order, ShareItem};
use sharehub::store::{ITEMS_KEY, ORDERS_KEY};
use sharehub::{FileBackend, HubError, MemoryBackend, StorageBackend, Store, TrackingStatus};

#[test]
fn first_read_seeds_and_persists() {
  setup_tracing();
  let store = Store::in_memory();
  assert!(store.keys().unwrap().is_empty());

  let items: Vec<ShareItem> = store.all().unwrap();
  let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
  assert_eq!(names, vec!["Drill Machine", "Microwave Oven", "Projector"]);
  assert_eq!(store.keys().unwrap(), vec![ITEMS_KEY.to_string()]);

  let orders: Vec<Order> = store.all().unwrap();
  assert_eq!(orders.len(), 1);
  assert_eq!(orders[0].id, "ORD-001");
  assert_eq!(orders[0].status, TrackingStatus::InTransit);
  assert!(orders[0].carrier_id.is_none());
}

#[test]
fn upsert_replaces_first_match_and_appends_otherwise() {
  let store = Store::in_memory();
  let mut drill = store.find::<ShareItem>("1").unwrap().unwrap();
  drill.price_per_day = 175;
  store.upsert(&drill).unwrap();

  let items: Vec<ShareItem> = store.all().unwrap();
  assert_eq!(items.len(), 3);
  assert_eq!(items[0].price_per_day, 175);

  let mut copy = drill.clone();
  copy.id = "42".to_string();
  store.upsert(&copy).unwrap();
  let items: Vec<ShareItem> = store.all().unwrap();
  assert_eq!(items.len(), 4);
  assert_eq!(items.last().unwrap().id, "42");
}

#[test]
fn upsert_touches_only_the_first_duplicate() {
  let mut backend = MemoryBackend::new();
  let dup = r#"[{"id":"x","name":"A","description":"","category":"Stationery","ownerId":"u1","ownerName":"Ann","distance":"1 km","pricePerDay":10,"imageUrl":"i","status":"available","lendingCount":0},
              {"id":"x","name":"B","description":"","category":"Stationery","ownerId":"u1","ownerName":"Ann","distance":"1 km","pricePerDay":10,"imageUrl":"i","status":"available","lendingCount":0}]"#;
  backend.write(ITEMS_KEY, dup.to_string()).unwrap();
  let store = Store::new(backend);

  let mut first = store.find::<ShareItem>("x").unwrap().unwrap();
  assert_eq!(first.name, "A");
  first.name = "A2".to_string();
  store.upsert(&first).unwrap();

  let names: Vec<String> = store.all::<ShareItem>().unwrap().into_iter().map(|i| i.name).collect();
  assert_eq!(names, vec!["A2", "B"]);
}

#[test]
fn delete_removes_only_matching_records() {
  let store = Store::in_memory();
  assert_eq!(store.delete::<ShareItem>("2").unwrap(), 1);
  let ids: Vec<String> = store.all::<ShareItem>().unwrap().into_iter().map(|i| i.id).collect();
  assert_eq!(ids, vec!["1", "3"]);

  // Absent id is a no-op, and orders referencing the item are untouched.
  assert_eq!(store.delete::<ShareItem>("2").unwrap(), 0);
  assert_eq!(store.all::<Order>().unwrap()[0].item_id, "1");
}

#[test]
fn missing_lending_count_reads_as_zero() {
  let mut backend = MemoryBackend::new();
  let legacy = r#"[{"id":"9","name":"Tent","description":"2 person","category":"Sports Tools","ownerId":"u9","ownerName":"Neha","distance":"1.2 km","pricePerDay":80,"imageUrl":"i","status":"rented"}]"#;
  backend.write(ITEMS_KEY, legacy.to_string()).unwrap();
  let store = Store::new(backend);
  let items: Vec<ShareItem> = store.all().unwrap();
  assert_eq!(items[0].lending_count, 0);
  assert!(!items[0].is_available());
}

#[test]
fn corrupt_collection_is_a_serialization_error() {
  let mut backend = MemoryBackend::new();
  backend.write(ORDERS_KEY, "{not json".to_string()).unwrap();
  let store = Store::new(backend);
  let err = store.all::<Order>().unwrap_err();
  assert!(matches!(err, HubError::Serialization { ref key, .. } if key == ORDERS_KEY));
}

#[test]
fn file_backed_store_survives_reopen() {
  setup_tracing();
  let dir = tempfile::tempdir().unwrap();
  {
    let store = Store::open_dir(dir.path()).unwrap();
    store.delete::<ShareItem>("3").unwrap();
    store.put_json("user_asha@example.com", &serde_json::json!({"id": "u7"})).unwrap();
  }

  let reopened = Store::new(FileBackend::new(dir.path()).unwrap());
  let ids: Vec<String> = reopened.all::<ShareItem>().unwrap().into_iter().map(|i| i.id).collect();
  assert_eq!(ids, vec!["1", "2"]);
  let raw: serde_json::Value = reopened.get_json("user_asha@example.com").unwrap().unwrap();
  assert_eq!(raw["id"], "u7");
  assert!(dir.path().join("user_asha%40example.com.json").exists());
}

#[test]
fn json_uses_camel_case_field_names() {
  let store = Store::in_memory();
  let item = store.find::<ShareItem>("1").unwrap().unwrap();
  let json = serde_json::to_value(&item).unwrap();
  assert_eq!(json["pricePerDay"], 150);
  assert_eq!(json["lendingCount"], 15);
  assert_eq!(json["category"], "Tools and Equipment");
  assert_eq!(json["status"], "available");
}

#[test]
#[serial]
fn concurrent_upserts_do_not_lose_records() {
  let store = Store::in_memory();
  let base = store.find::<ShareItem>("1").unwrap().unwrap();

  let handles: Vec<_> = (0..8)
    .map(|n| {
      let store = store.clone();
      let mut item = base.clone();
      std::thread::spawn(move || {
        item.id = format!("t{n}");
        store.upsert(&item).unwrap();
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }
  assert_eq!(store.all::<ShareItem>().unwrap().len(), 3 + 8);
}
