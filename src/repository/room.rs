use diesel::prelude::*;

use crate::domain::room::{NewRoom, Room};
use crate::domain::types::{RoomId, RoomName};
use crate::models::room::{NewRoom as DbNewRoom, Room as DbRoom};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RoomReader, RoomWriter};

impl RoomReader for DieselRepository {
    fn list_rooms(&self) -> RepositoryResult<Vec<Room>> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let rooms = rooms::table
            .order(rooms::created_at.desc())
            .load::<DbRoom>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Room>, _>>()?;

        Ok(rooms)
    }

    fn get_room_by_id(&self, id: RoomId) -> RepositoryResult<Option<Room>> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let room = rooms::table
            .filter(rooms::id.eq(id.get()))
            .first::<DbRoom>(&mut conn)
            .optional()?;

        let room = room.map(TryInto::try_into).transpose()?;
        Ok(room)
    }
}

impl RoomWriter for DieselRepository {
    fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;
        let db_room: DbNewRoom = room.clone().into();

        let created = diesel::insert_into(rooms::table)
            .values(db_room)
            .get_result::<DbRoom>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_room(&self, id: RoomId, name: &RoomName) -> RepositoryResult<usize> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let affected = diesel::update(rooms::table.filter(rooms::id.eq(id.get())))
            .set(rooms::name.eq(name.as_str()))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_room(&self, id: RoomId) -> RepositoryResult<usize> {
        use crate::schema::{items, rooms};

        let mut conn = self.conn()?;

        // The cascade is one transaction: either the room and all its items
        // disappear together, or nothing does.
        let affected = conn.transaction(|conn| {
            diesel::delete(items::table.filter(items::room_id.eq(id.get()))).execute(conn)?;

            diesel::delete(rooms::table.filter(rooms::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
