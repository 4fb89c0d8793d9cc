use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CostPerUnit, ItemId, ItemName, ItemQuantity, RoomId};

/// A unit of inventory belonging to exactly one room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub room_id: RoomId,
    pub name: ItemName,
    pub quantity: ItemQuantity,
    pub cost_per_unit: CostPerUnit,
    pub created_at: Option<NaiveDateTime>,
}

/// Information required to create a new [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub room_id: RoomId,
    pub name: ItemName,
    pub quantity: ItemQuantity,
    pub cost_per_unit: CostPerUnit,
    pub created_at: NaiveDateTime,
}

/// Mutable fields replaced by an item update. `id` and `room_id` are
/// preserved by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemUpdate {
    pub name: ItemName,
    pub quantity: ItemQuantity,
    pub cost_per_unit: CostPerUnit,
}
