use crate::domain::types::RoomId;
use crate::forms::items::{AddItemFormPayload, DeleteItemFormPayload, UpdateItemFormPayload};
use crate::repository::{ItemReader, ItemWriter, RoomReader};

use super::{ServiceError, ServiceResult};

/// Create an item inside the given room. The room must exist: an item's
/// lifetime is bounded by its owning room.
pub fn add_item<R>(payload: AddItemFormPayload, room_id: RoomId, repo: &R) -> ServiceResult<bool>
where
    R: RoomReader + ItemWriter,
{
    match repo.get_room_by_id(room_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get room: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let item = payload.into_new_item(room_id);
    match repo.create_item(&item) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create item: {e}");
            Ok(false)
        }
    }
}

pub fn update_item<R>(payload: UpdateItemFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: ItemReader + ItemWriter,
{
    let item_id = payload.item_id;
    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let update = payload.into_item_update();
    match repo.update_item(item_id, &update) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update item: {e}");
            Ok(false)
        }
    }
}

pub fn delete_item<R>(payload: DeleteItemFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: ItemReader + ItemWriter,
{
    match repo.get_item_by_id(payload.item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_item(payload.item_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete item: {e}");
            Ok(false)
        }
    }
}
