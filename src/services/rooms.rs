use crate::domain::types::RoomId;
use crate::dto::rooms::RoomPageDto;
use crate::forms::rooms::{AddRoomFormPayload, DeleteRoomFormPayload, UpdateRoomFormPayload};
use crate::repository::{ItemListQuery, ItemReader, RoomReader, RoomWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering a room detail page.
pub fn show_room<R>(room_id: RoomId, repo: &R) -> ServiceResult<RoomPageDto>
where
    R: RoomReader + ItemReader,
{
    let room = match repo.get_room_by_id(room_id) {
        Ok(Some(room)) => room,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get room: {e}");
            return Err(ServiceError::Internal);
        }
    };

    // Item load failures degrade to an empty table; the page still renders.
    let items = match repo.list_items(ItemListQuery::default().room(room.id)) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list items: {e}");
            Vec::new()
        }
    };

    Ok(RoomPageDto::new(&room, &items))
}

pub fn add_room<R>(payload: AddRoomFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: RoomWriter,
{
    let room = payload.into_new_room();
    match repo.create_room(&room) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create room: {e}");
            Ok(false)
        }
    }
}

pub fn update_room<R>(payload: UpdateRoomFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: RoomReader + RoomWriter,
{
    match repo.get_room_by_id(payload.room_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get room: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_room(payload.room_id, &payload.name) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update room: {e}");
            Ok(false)
        }
    }
}

pub fn delete_room<R>(payload: DeleteRoomFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: RoomReader + RoomWriter,
{
    match repo.get_room_by_id(payload.room_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get room: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_room(payload.room_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete room: {e}");
            Ok(false)
        }
    }
}
