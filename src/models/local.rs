//! Serde documents for the local JSON storage backend.
//!
//! The local backend persists each collection as a JSON array under its
//! collection key. Field names are camelCase (`roomId`, `costPerUnit`), the
//! wire shape the original device-local store used, so existing documents
//! remain readable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::room::{NewRoom as DomainNewRoom, Room as DomainRoom};
use crate::domain::types::{
    CostPerUnit, ItemId, ItemName, ItemQuantity, RoomId, RoomName, TypeConstraintError,
};

/// Stored form of a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredRoom {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Stored form of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub id: i32,
    pub room_id: i32,
    pub name: String,
    pub quantity: i32,
    pub cost_per_unit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl TryFrom<StoredRoom> for DomainRoom {
    type Error = TypeConstraintError;

    fn try_from(room: StoredRoom) -> Result<Self, Self::Error> {
        Ok(Self {
            id: room.id.try_into()?,
            name: RoomName::new(room.name)?,
            created_at: room.created_at,
        })
    }
}

impl From<DomainRoom> for StoredRoom {
    fn from(room: DomainRoom) -> Self {
        Self {
            id: room.id.get(),
            name: room.name.into_inner(),
            created_at: room.created_at,
        }
    }
}

impl StoredRoom {
    /// Stored form of a new room once the backend has assigned an id.
    pub fn from_new(id: RoomId, room: DomainNewRoom) -> Self {
        Self {
            id: id.get(),
            name: room.name.into_inner(),
            created_at: Some(room.created_at),
        }
    }
}

impl TryFrom<StoredItem> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: StoredItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            room_id: item.room_id.try_into()?,
            name: ItemName::new(item.name)?,
            quantity: ItemQuantity::new(item.quantity)?,
            cost_per_unit: CostPerUnit::new(item.cost_per_unit)?,
            created_at: item.created_at,
        })
    }
}

impl From<DomainItem> for StoredItem {
    fn from(item: DomainItem) -> Self {
        Self {
            id: item.id.get(),
            room_id: item.room_id.get(),
            name: item.name.into_inner(),
            quantity: item.quantity.get(),
            cost_per_unit: item.cost_per_unit.get(),
            created_at: item.created_at,
        }
    }
}

impl StoredItem {
    /// Stored form of a new item once the backend has assigned an id.
    pub fn from_new(id: ItemId, item: DomainNewItem) -> Self {
        Self {
            id: id.get(),
            room_id: item.room_id.get(),
            name: item.name.into_inner(),
            quantity: item.quantity.get(),
            cost_per_unit: item.cost_per_unit.get(),
            created_at: Some(item.created_at),
        }
    }
}
