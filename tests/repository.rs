use chrono::DateTime;
use pushkind_inventory::domain::item::{ItemUpdate, NewItem};
use pushkind_inventory::domain::room::NewRoom;
use pushkind_inventory::domain::types::{
    CostPerUnit, ItemName, ItemQuantity, RoomId, RoomName,
};
use pushkind_inventory::repository::{
    DieselRepository, ItemListQuery, ItemReader, ItemWriter, RoomReader, RoomWriter,
};

mod common;

fn new_room(name: &str, timestamp: i64) -> NewRoom {
    NewRoom {
        name: RoomName::new(name).expect("valid room name"),
        created_at: DateTime::from_timestamp(timestamp, 0)
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
fn create_room_returns_store_assigned_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_room(&new_room("Kitchen", 100))
        .expect("should create room");

    assert!(created.id.get() > 0);
    assert_eq!(created.name.as_str(), "Kitchen");
    assert!(created.created_at.is_some());

    let fetched = repo
        .get_room_by_id(created.id)
        .expect("should fetch room")
        .expect("room should exist");
    assert_eq!(fetched, created);
}

#[test]
fn rooms_are_listed_newest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_room(&new_room("Older", 100))
        .expect("should create room");
    repo.create_room(&new_room("Newer", 200))
        .expect("should create room");

    let rooms = repo.list_rooms().expect("should list rooms");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].name.as_str(), "Newer");
    assert_eq!(rooms[1].name.as_str(), "Older");
}

#[test]
fn update_room_replaces_only_the_name() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_room(&new_room("Kitchen", 100))
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
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let kitchen = repo
        .create_room(&new_room("Kitchen", 100))
        .expect("should create room");
    let garage = repo
        .create_room(&new_room("Garage", 200))
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

    assert!(
        repo.get_room_by_id(kitchen.id)
            .expect("should fetch room")
            .is_none()
    );

    let remaining = repo
        .list_items(ItemListQuery::default())
        .expect("should list items");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, drill.id);
    assert_eq!(remaining[0].room_id, garage.id);

    let orphaned = repo
        .list_items(ItemListQuery::default().room(kitchen.id))
        .expect("should list items");
    assert!(orphaned.is_empty());
}

#[test]
fn update_item_preserves_id_and_room() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let room = repo
        .create_room(&new_room("Kitchen", 100))
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
    assert_eq!(fetched.cost_per_unit, 12.5);
}

#[test]
fn delete_item_removes_exactly_one_item() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let room = repo
        .create_room(&new_room("Kitchen", 100))
        .expect("should create room");
    let toaster = repo
        .create_item(&new_item(room.id, "Toaster", 2, 25.0))
        .expect("should create item");
    let kettle = repo
        .create_item(&new_item(room.id, "Kettle", 1, 9.99))
        .expect("should create item");

    let affected = repo.delete_item(toaster.id).expect("should delete item");
    assert_eq!(affected, 1);

    let remaining = repo
        .list_items(ItemListQuery::default().room(room.id))
        .expect("should list items");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kettle.id);
}

#[test]
fn missing_entities_yield_none_and_zero_affected() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let room_id = RoomId::new(999).unwrap();
    assert!(
        repo.get_room_by_id(room_id)
            .expect("should query room")
            .is_none()
    );
    assert_eq!(
        repo.update_room(room_id, &RoomName::new("Nobody").unwrap())
            .expect("should run update"),
        0
    );
    assert_eq!(repo.delete_room(room_id).expect("should run delete"), 0);
}
