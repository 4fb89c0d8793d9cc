use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::types::{CostPerUnit, ItemName, ItemQuantity, TypeConstraintError};

/// Diesel model representing the `items` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::items)]
pub struct Item {
    pub id: i32,
    pub room_id: i32,
    pub name: String,
    pub quantity: i32,
    pub cost_per_unit: f64,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Item`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItem {
    pub room_id: i32,
    pub name: String,
    pub quantity: i32,
    pub cost_per_unit: f64,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            room_id: item.room_id.try_into()?,
            name: ItemName::new(item.name)?,
            quantity: ItemQuantity::new(item.quantity)?,
            cost_per_unit: CostPerUnit::new(item.cost_per_unit)?,
            created_at: Some(item.created_at),
        })
    }
}

impl From<DomainNewItem> for NewItem {
    fn from(item: DomainNewItem) -> Self {
        Self {
            room_id: item.room_id.get(),
            name: item.name.into_inner(),
            quantity: item.quantity.get(),
            cost_per_unit: item.cost_per_unit.get(),
            created_at: item.created_at,
        }
    }
}
