use serde::Serialize;

use crate::domain::item::Item;

/// Item row rendered in the room detail table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub cost_per_unit: f64,
    pub cost_display: String,
    pub total_value: String,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        let cost = item.cost_per_unit.get();
        let total = f64::from(item.quantity.get()) * cost;
        Self {
            id: item.id.get(),
            name: item.name.as_str().to_string(),
            quantity: item.quantity.get(),
            cost_per_unit: cost,
            cost_display: format!("{cost:.2}"),
            total_value: format!("{total:.2}"),
        }
    }
}
