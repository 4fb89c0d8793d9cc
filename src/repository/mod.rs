use crate::db::{DbConnection, DbPool};
use crate::domain::item::{Item, ItemUpdate, NewItem};
use crate::domain::room::{NewRoom, Room};
use crate::domain::types::{ItemId, RoomId, RoomName};
use crate::repository::errors::RepositoryResult;
use crate::repository::local::LocalStorageRepository;

pub mod errors;
pub mod item;
pub mod local;
pub mod room;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemListQuery {
    /// Restrict to items belonging to a room.
    pub room_id: Option<RoomId>,
}

impl ItemListQuery {
    pub fn room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }
}

/// Read-only operations for room entities.
pub trait RoomReader {
    /// List all rooms.
    fn list_rooms(&self) -> RepositoryResult<Vec<Room>>;
    /// Retrieve a room by its identifier.
    fn get_room_by_id(&self, id: RoomId) -> RepositoryResult<Option<Room>>;
}

/// Write operations for room entities.
pub trait RoomWriter {
    /// Persist a new room and return it with its store-assigned fields.
    fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room>;
    /// Rename a room.
    fn update_room(&self, id: RoomId, name: &RoomName) -> RepositoryResult<usize>;
    /// Delete a room together with every item belonging to it.
    fn delete_room(&self, id: RoomId) -> RepositoryResult<usize>;
}

/// Read-only operations for item entities.
pub trait ItemReader {
    /// List items matching the supplied query parameters.
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<Vec<Item>>;
    /// Retrieve an item by its identifier.
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
}

/// Write operations for item entities.
pub trait ItemWriter {
    /// Persist a new item and return it with its store-assigned fields.
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item>;
    /// Replace an item's mutable fields, preserving `id` and `room_id`.
    fn update_item(&self, id: ItemId, update: &ItemUpdate) -> RepositoryResult<usize>;
    /// Delete an item by id.
    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize>;
}

/// The storage backend selected at startup.
///
/// Handlers hold this enum so the choice between the relational and the local
/// JSON backend stays a configuration concern.
#[derive(Clone)]
pub enum AnyRepository {
    Diesel(DieselRepository),
    Local(LocalStorageRepository),
}

impl RoomReader for AnyRepository {
    fn list_rooms(&self) -> RepositoryResult<Vec<Room>> {
        match self {
            Self::Diesel(repo) => repo.list_rooms(),
            Self::Local(repo) => repo.list_rooms(),
        }
    }

    fn get_room_by_id(&self, id: RoomId) -> RepositoryResult<Option<Room>> {
        match self {
            Self::Diesel(repo) => repo.get_room_by_id(id),
            Self::Local(repo) => repo.get_room_by_id(id),
        }
    }
}

impl RoomWriter for AnyRepository {
    fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room> {
        match self {
            Self::Diesel(repo) => repo.create_room(room),
            Self::Local(repo) => repo.create_room(room),
        }
    }

    fn update_room(&self, id: RoomId, name: &RoomName) -> RepositoryResult<usize> {
        match self {
            Self::Diesel(repo) => repo.update_room(id, name),
            Self::Local(repo) => repo.update_room(id, name),
        }
    }

    fn delete_room(&self, id: RoomId) -> RepositoryResult<usize> {
        match self {
            Self::Diesel(repo) => repo.delete_room(id),
            Self::Local(repo) => repo.delete_room(id),
        }
    }
}

impl ItemReader for AnyRepository {
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<Vec<Item>> {
        match self {
            Self::Diesel(repo) => repo.list_items(query),
            Self::Local(repo) => repo.list_items(query),
        }
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        match self {
            Self::Diesel(repo) => repo.get_item_by_id(id),
            Self::Local(repo) => repo.get_item_by_id(id),
        }
    }
}

impl ItemWriter for AnyRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        match self {
            Self::Diesel(repo) => repo.create_item(item),
            Self::Local(repo) => repo.create_item(item),
        }
    }

    fn update_item(&self, id: ItemId, update: &ItemUpdate) -> RepositoryResult<usize> {
        match self {
            Self::Diesel(repo) => repo.update_item(id, update),
            Self::Local(repo) => repo.update_item(id, update),
        }
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize> {
        match self {
            Self::Diesel(repo) => repo.delete_item(id),
            Self::Local(repo) => repo.delete_item(id),
        }
    }
}
