use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::room::{NewRoom as DomainNewRoom, Room as DomainRoom};
use crate::domain::types::{RoomName, TypeConstraintError};

/// Diesel model representing the `rooms` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Room`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoom {
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Room> for DomainRoom {
    type Error = TypeConstraintError;

    fn try_from(room: Room) -> Result<Self, Self::Error> {
        Ok(Self {
            id: room.id.try_into()?,
            name: RoomName::new(room.name)?,
            created_at: Some(room.created_at),
        })
    }
}

impl From<DomainNewRoom> for NewRoom {
    fn from(room: DomainNewRoom) -> Self {
        Self {
            name: room.name.into_inner(),
            created_at: room.created_at,
        }
    }
}
