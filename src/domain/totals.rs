//! Derived monetary totals.
//!
//! Pure functions over in-memory collections; no side effects and no
//! persistence. The grand total is computed per-room-then-summed so it always
//! reconciles with the per-room values shown next to it.

use crate::domain::item::Item;
use crate::domain::room::Room;
use crate::domain::types::RoomId;

/// Total value of a single room: sum of `quantity * cost_per_unit` over the
/// items belonging to it. A room with no items totals `0.0`.
pub fn room_total(items: &[Item], room_id: RoomId) -> f64 {
    let total: f64 = items
        .iter()
        .filter(|item| item.room_id == room_id)
        .map(|item| f64::from(item.quantity.get()) * item.cost_per_unit.get())
        .sum();
    // Canonicalize the empty-sum identity (`-0.0`) to `0.0`; no effect on any
    // other value.
    total + 0.0
}

/// Total value across the whole inventory: sum of [`room_total`] over all
/// rooms.
pub fn grand_total(rooms: &[Room], items: &[Item]) -> f64 {
    let total: f64 = rooms.iter().map(|room| room_total(items, room.id)).sum();
    // Canonicalize the empty-sum identity (`-0.0`) to `0.0`; no effect on any
    // other value.
    total + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CostPerUnit, ItemId, ItemName, ItemQuantity, RoomName};

    fn room(id: i32, name: &str) -> Room {
        Room {
            id: RoomId::new(id).unwrap(),
            name: RoomName::new(name).unwrap(),
            created_at: None,
        }
    }

    fn item(id: i32, room_id: i32, quantity: i32, cost: f64) -> Item {
        Item {
            id: ItemId::new(id).unwrap(),
            room_id: RoomId::new(room_id).unwrap(),
            name: ItemName::new(format!("item-{id}")).unwrap(),
            quantity: ItemQuantity::new(quantity).unwrap(),
            cost_per_unit: CostPerUnit::new(cost).unwrap(),
            created_at: None,
        }
    }

    #[test]
    fn empty_collections_total_zero() {
        assert_eq!(room_total(&[], RoomId::new(1).unwrap()), 0.0);
        assert_eq!(grand_total(&[], &[]), 0.0);
    }

    #[test]
    fn room_with_no_items_totals_zero() {
        let rooms = vec![room(1, "Kitchen")];
        let items = vec![item(1, 2, 3, 10.0)];
        assert_eq!(room_total(&items, rooms[0].id), 0.0);
    }

    #[test]
    fn room_total_sums_quantity_times_cost() {
        let items = vec![item(1, 1, 2, 25.0), item(2, 1, 1, 9.99), item(3, 2, 5, 1.0)];
        let total = room_total(&items, RoomId::new(1).unwrap());
        assert!((total - 59.99).abs() < 1e-9);
    }

    #[test]
    fn grand_total_equals_sum_of_room_totals() {
        let rooms = vec![room(1, "Kitchen"), room(2, "Garage")];
        let items = vec![item(1, 1, 2, 25.0), item(2, 2, 5, 1.0), item(3, 2, 1, 0.5)];

        let per_room: f64 = rooms.iter().map(|r| room_total(&items, r.id)).sum();
        let ungrouped: f64 = items
            .iter()
            .map(|i| f64::from(i.quantity.get()) * i.cost_per_unit.get())
            .sum();

        let grand = grand_total(&rooms, &items);
        assert!((grand - per_room).abs() < 1e-9);
        assert!((grand - ungrouped).abs() < 1e-9);
    }

    #[test]
    fn totals_are_order_independent() {
        let rooms = vec![room(1, "Kitchen"), room(2, "Garage")];
        let mut items = vec![item(1, 1, 2, 25.0), item(2, 2, 5, 1.0), item(3, 1, 1, 9.99)];
        let forward = grand_total(&rooms, &items);
        items.reverse();
        let reversed = grand_total(&rooms, &items);
        assert!((forward - reversed).abs() < 1e-9);
    }

    #[test]
    fn kitchen_scenario() {
        let rooms = vec![room(1, "Kitchen")];
        let mut items: Vec<Item> = Vec::new();
        assert_eq!(grand_total(&rooms, &items), 0.0);

        items.push(item(1, 1, 2, 25.0));
        assert!((room_total(&items, rooms[0].id) - 50.0).abs() < 1e-9);
        assert!((grand_total(&rooms, &items) - 50.0).abs() < 1e-9);

        items.push(item(2, 1, 1, 9.99));
        assert!((room_total(&items, rooms[0].id) - 59.99).abs() < 1e-9);

        // Deleting the room cascades to its items.
        let rooms: Vec<Room> = Vec::new();
        let items: Vec<Item> = items
            .into_iter()
            .filter(|i| i.room_id != RoomId::new(1).unwrap())
            .collect();
        assert!(items.is_empty());
        assert_eq!(grand_total(&rooms, &items), 0.0);
    }
}
