use crate::dto::rooms::IndexDto;
use crate::repository::{ItemListQuery, ItemReader, RoomReader};

use super::ServiceResult;

/// Core business logic for rendering the index page.
///
/// Collections that fail to load degrade to empty with a logged diagnostic,
/// so the page always renders from whatever the store could provide.
pub fn show_index<R>(repo: &R) -> ServiceResult<IndexDto>
where
    R: RoomReader + ItemReader,
{
    let rooms = match repo.list_rooms() {
        Ok(rooms) => rooms,
        Err(e) => {
            log::error!("Failed to list rooms: {e}");
            Vec::new()
        }
    };

    let items = match repo.list_items(ItemListQuery::default()) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list items: {e}");
            Vec::new()
        }
    };

    Ok(IndexDto::new(&rooms, &items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Item;
    use crate::domain::room::Room;
    use crate::domain::types::{
        CostPerUnit, ItemId, ItemName, ItemQuantity, RoomId, RoomName,
    };
    use crate::repository::test::TestRepository;

    fn sample_room(id: i32, name: &str) -> Room {
        Room {
            id: RoomId::new(id).unwrap(),
            name: RoomName::new(name).unwrap(),
            created_at: None,
        }
    }

    fn sample_item(id: i32, room_id: i32, quantity: i32, cost: f64) -> Item {
        Item {
            id: ItemId::new(id).unwrap(),
            room_id: RoomId::new(room_id).unwrap(),
            name: ItemName::new("Toaster").unwrap(),
            quantity: ItemQuantity::new(quantity).unwrap(),
            cost_per_unit: CostPerUnit::new(cost).unwrap(),
            created_at: None,
        }
    }

    #[test]
    fn index_aggregates_per_room_and_grand_totals() {
        let repo = TestRepository::new(
            vec![sample_room(1, "Kitchen"), sample_room(2, "Garage")],
            vec![sample_item(1, 1, 2, 25.0), sample_item(2, 2, 1, 9.99)],
        );

        let index = show_index(&repo).unwrap();

        assert_eq!(index.rooms.len(), 2);
        assert_eq!(index.rooms[0].total_value, "50.00");
        assert_eq!(index.rooms[1].total_value, "9.99");
        assert_eq!(index.grand_total, "59.99");
    }

    #[test]
    fn index_renders_empty_store() {
        let repo = TestRepository::default();
        let index = show_index(&repo).unwrap();
        assert!(index.rooms.is_empty());
        assert_eq!(index.grand_total, "0.00");
    }
}
