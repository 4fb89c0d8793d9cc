use diesel::prelude::*;

use crate::domain::item::{Item, ItemUpdate, NewItem};
use crate::domain::types::ItemId;
use crate::models::item::{Item as DbItem, NewItem as DbNewItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ItemListQuery, ItemReader, ItemWriter};

impl ItemReader for DieselRepository {
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<Vec<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let mut statement = items::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(room_id) = query.room_id {
            statement = statement.filter(items::room_id.eq(room_id.get()));
        }

        let items = statement
            .order(items::created_at.desc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;

        Ok(items)
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let item = items::table
            .filter(items::id.eq(id.get()))
            .first::<DbItem>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item: DbNewItem = item.clone().into();

        let created = diesel::insert_into(items::table)
            .values(db_item)
            .get_result::<DbItem>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_item(&self, id: ItemId, update: &ItemUpdate) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let affected = diesel::update(items::table.filter(items::id.eq(id.get())))
            .set((
                items::name.eq(update.name.as_str()),
                items::quantity.eq(update.quantity.get()),
                items::cost_per_unit.eq(update.cost_per_unit.get()),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(items::table.filter(items::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
