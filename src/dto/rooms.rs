use serde::Serialize;

use crate::domain::item::Item;
use crate::domain::room::Room;
use crate::domain::totals::{grand_total, room_total};
use crate::dto::items::ItemDto;

/// Room summary rendered as a card on the index page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomCardDto {
    pub id: i32,
    pub name: String,
    pub item_count: usize,
    pub total_value: String,
}

impl RoomCardDto {
    pub fn new(room: &Room, items: &[Item]) -> Self {
        Self {
            id: room.id.get(),
            name: room.name.as_str().to_string(),
            item_count: items.iter().filter(|i| i.room_id == room.id).count(),
            total_value: format!("{:.2}", room_total(items, room.id)),
        }
    }
}

/// Everything the index page renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexDto {
    pub rooms: Vec<RoomCardDto>,
    pub grand_total: String,
}

impl IndexDto {
    pub fn new(rooms: &[Room], items: &[Item]) -> Self {
        Self {
            rooms: rooms.iter().map(|room| RoomCardDto::new(room, items)).collect(),
            grand_total: format!("{:.2}", grand_total(rooms, items)),
        }
    }
}

/// Everything the room detail page renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomPageDto {
    pub id: i32,
    pub name: String,
    pub item_count: usize,
    pub total_value: String,
    pub items: Vec<ItemDto>,
}

impl RoomPageDto {
    /// Build from a room and the items already filtered to it.
    pub fn new(room: &Room, items: &[Item]) -> Self {
        Self {
            id: room.id.get(),
            name: room.name.as_str().to_string(),
            item_count: items.len(),
            total_value: format!("{:.2}", room_total(items, room.id)),
            items: items.iter().map(ItemDto::from).collect(),
        }
    }
}
