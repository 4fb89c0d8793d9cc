use std::fs;

use chrono::DateTime;
use pushkind_inventory::domain::item::{ItemUpdate, NewItem};
use pushkind_inventory::domain::room::NewRoom;
use pushkind_inventory::domain::types::{
    CostPerUnit, ItemName, ItemQuantity, RoomId, RoomName,
};
use pushkind_inventory::repository::local::LocalStorageRepository;
use pushkind_inventory::repository::{
    ItemListQuery, ItemReader, ItemWriter, RoomReader, RoomWriter,
};

fn new_room(name: &str) -> NewRoom {
    NewRoom {
        name: RoomName::new(name).expect("valid room name"),
        created_at: DateTime::from_timestamp(0, 0)
            .expect("valid timestamp")
            .naive_utc(),
    }
}

fn new_item(room_id: RoomId, name: &str, quantity: i32, cost: f64) -> NewItem {
    NewItem {
        room_id,
        name: ItemName::new(name).expect("valid item name"),
        quantity: ItemQuantity::new(quantity).expect("valid quantity"),
        cost_per_unit: CostPerUnit::new(cost).expect("valid cost"),
        created_at: DateTime::from_timestamp(0, 0)
            .expect("valid timestamp")
            .naive_utc(),
    }
}

#[test]
fn missing_collections_load_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    assert!(repo.list_rooms().expect("should list rooms").is_empty());
    assert!(
        repo.list_items(ItemListQuery::default())
            .expect("should list items")
            .is_empty()
    );
}

#[test]
fn corrupt_documents_load_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    fs::write(dir.path().join("rooms.json"), "{not json").expect("write garbage");

    assert!(repo.list_rooms().expect("should list rooms").is_empty());
}

#[test]
fn saved_collections_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let kitchen = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");
    let toaster = repo
        .create_item(&new_item(kitchen.id, "Toaster", 2, 25.0))
        .expect("should create item");

    // A fresh handle over the same directory sees identical entities.
    let reopened = LocalStorageRepository::new(dir.path()).expect("open storage");
    let rooms = reopened.list_rooms().expect("should list rooms");
    let items = reopened
        .list_items(ItemListQuery::default())
        .expect("should list items");

    assert_eq!(rooms, vec![kitchen]);
    assert_eq!(items, vec![toaster]);
}

#[test]
fn documents_are_stored_under_collection_keys_in_camel_case() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let room = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");
    repo.create_item(&new_item(room.id, "Toaster", 2, 25.0))
        .expect("should create item");

    let rooms_json = fs::read_to_string(dir.path().join("rooms.json")).expect("rooms document");
    let items_json = fs::read_to_string(dir.path().join("items.json")).expect("items document");

    let rooms: serde_json::Value = serde_json::from_str(&rooms_json).expect("valid json");
    assert!(rooms.is_array());

    let items: serde_json::Value = serde_json::from_str(&items_json).expect("valid json");
    let item = &items.as_array().expect("array")[0];
    assert!(item.get("roomId").is_some());
    assert!(item.get("costPerUnit").is_some());
    assert!(item.get("room_id").is_none());
}

#[test]
fn create_assigns_fresh_identifiers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let first = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");
    let second = repo
        .create_room(&new_room("Garage"))
        .expect("should create room");

    assert!(second.id.get() > first.id.get());
}

#[test]
fn update_room_replaces_only_the_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let created = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");

    let affected = repo
        .update_room(created.id, &RoomName::new("Pantry").unwrap())
        .expect("should update room");
    assert_eq!(affected, 1);

    let fetched = repo
        .get_room_by_id(created.id)
        .expect("should fetch room")
        .expect("room should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name.as_str(), "Pantry");
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn delete_room_cascades_to_its_items() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let kitchen = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");
    let garage = repo
        .create_room(&new_room("Garage"))
        .expect("should create room");
    repo.create_item(&new_item(kitchen.id, "Toaster", 2, 25.0))
        .expect("should create item");
    repo.create_item(&new_item(kitchen.id, "Kettle", 1, 9.99))
        .expect("should create item");
    let drill = repo
        .create_item(&new_item(garage.id, "Drill", 1, 79.0))
        .expect("should create item");

    let affected = repo.delete_room(kitchen.id).expect("should delete room");
    assert_eq!(affected, 1);

    let remaining = repo
        .list_items(ItemListQuery::default())
        .expect("should list items");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, drill.id);
    assert!(
        repo.list_items(ItemListQuery::default().room(kitchen.id))
            .expect("should list items")
            .is_empty()
    );
}

#[test]
fn update_item_preserves_id_and_room() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = LocalStorageRepository::new(dir.path()).expect("open storage");

    let room = repo
        .create_room(&new_room("Kitchen"))
        .expect("should create room");
    let created = repo
        .create_item(&new_item(room.id, "Toaster", 2, 25.0))
        .expect("should create item");

    let update = ItemUpdate {
        name: ItemName::new("Kettle").unwrap(),
        quantity: ItemQuantity::new(3).unwrap(),
        cost_per_unit: CostPerUnit::new(12.5).unwrap(),
    };
    let affected = repo
        .update_item(created.id, &update)
        .expect("should update item");
    assert_eq!(affected, 1);

    let fetched = repo
        .get_item_by_id(created.id)
        .expect("should fetch item")
        .expect("item should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.room_id, room.id);
    assert_eq!(fetched.name.as_str(), "Kettle");
    assert_eq!(fetched.quantity, 3);
}
