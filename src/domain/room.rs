use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RoomId, RoomName};

/// A named grouping of inventory items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: RoomName,
    /// Assigned by the store at creation; drives newest-first ordering in the
    /// database backend. Absent for rooms persisted before timestamps existed.
    pub created_at: Option<NaiveDateTime>,
}

/// Information required to create a new [`Room`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRoom {
    pub name: RoomName,
    pub created_at: NaiveDateTime,
}
