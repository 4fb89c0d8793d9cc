//! Local storage backend: JSON collections in a directory.
//!
//! Each collection lives under its key (`rooms`, `items`) as one JSON array
//! in camelCase field names. Reads are total: any failure degrades to the
//! empty collection with a logged diagnostic. Writes probe the medium first
//! and rewrite the whole collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::item::{Item, ItemUpdate, NewItem};
use crate::domain::room::{NewRoom, Room};
use crate::domain::types::{ItemId, RoomId, RoomName};
use crate::models::local::{StoredItem, StoredRoom};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ItemListQuery, ItemReader, ItemWriter, RoomReader, RoomWriter};

/// Collection key holding rooms.
const ROOMS_KEY: &str = "rooms";
/// Collection key holding items.
const ITEMS_KEY: &str = "items";
/// Key written and removed to verify the medium is writable.
const PROBE_KEY: &str = "__storage_test__";

/// Repository persisting collections as JSON documents on the local disk.
#[derive(Clone)]
pub struct LocalStorageRepository {
    root: PathBuf,
}

impl LocalStorageRepository {
    /// Open (and create if needed) the storage directory.
    pub fn new(root: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory the collections are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Trial write/remove cycle. Handles read-only mounts and revoked
    /// permissions the same way the original handled private-browsing mode.
    fn is_available(&self) -> bool {
        let probe = self.collection_path(PROBE_KEY);
        match fs::write(&probe, PROBE_KEY) {
            Ok(()) => {
                let _ = fs::remove_file(&probe);
                true
            }
            Err(e) => {
                log::error!("Local storage unavailable: {e}");
                false
            }
        }
    }

    /// Read a collection. Never fails: a missing, unreadable or corrupt
    /// document yields the empty collection and a logged diagnostic.
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.collection_path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::error!("Error retrieving {key} from local storage: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(values) => values,
            Err(e) => {
                log::error!("Error retrieving {key} from local storage: {e}");
                Vec::new()
            }
        }
    }

    /// Rewrite a collection in full.
    fn save_collection<T: Serialize>(&self, key: &str, values: &[T]) -> RepositoryResult<()> {
        if !self.is_available() {
            return Err(RepositoryError::StorageUnavailable);
        }

        let json = serde_json::to_string(values)?;
        fs::write(self.collection_path(key), json).map_err(|e| match e.kind() {
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
                log::warn!("Local storage quota exceeded while saving {key}");
                RepositoryError::QuotaExceeded
            }
            _ => {
                log::error!("Error saving {key} to local storage: {e}");
                RepositoryError::Io(e)
            }
        })
    }

    fn load_rooms(&self) -> Vec<StoredRoom> {
        self.load_collection(ROOMS_KEY)
    }

    fn load_items(&self) -> Vec<StoredItem> {
        self.load_collection(ITEMS_KEY)
    }

    /// Next free identifier within a collection.
    fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
        ids.max().unwrap_or(0) + 1
    }
}

/// Convert stored documents, dropping (and logging) entries that no longer
/// satisfy domain constraints so reads stay total.
fn into_domain<S, D>(key: &str, stored: Vec<S>) -> Vec<D>
where
    D: TryFrom<S>,
    <D as TryFrom<S>>::Error: std::fmt::Display,
{
    stored
        .into_iter()
        .filter_map(|entry| match D::try_from(entry) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Dropping invalid {key} entry from local storage: {e}");
                None
            }
        })
        .collect()
}

impl RoomReader for LocalStorageRepository {
    fn list_rooms(&self) -> RepositoryResult<Vec<Room>> {
        Ok(into_domain(ROOMS_KEY, self.load_rooms()))
    }

    fn get_room_by_id(&self, id: RoomId) -> RepositoryResult<Option<Room>> {
        let rooms: Vec<Room> = into_domain(ROOMS_KEY, self.load_rooms());
        Ok(rooms.into_iter().find(|room| room.id == id))
    }
}

impl RoomWriter for LocalStorageRepository {
    fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room> {
        let mut rooms = self.load_rooms();
        let id = RoomId::new(Self::next_id(rooms.iter().map(|r| r.id)))?;
        let stored = StoredRoom::from_new(id, room.clone());
        rooms.push(stored.clone());
        self.save_collection(ROOMS_KEY, &rooms)?;
        Ok(stored.try_into()?)
    }

    fn update_room(&self, id: RoomId, name: &RoomName) -> RepositoryResult<usize> {
        let mut rooms = self.load_rooms();
        let mut affected = 0;
        for room in rooms.iter_mut().filter(|r| r.id == id.get()) {
            room.name = name.as_str().to_string();
            affected += 1;
        }
        if affected > 0 {
            self.save_collection(ROOMS_KEY, &rooms)?;
        }
        Ok(affected)
    }

    fn delete_room(&self, id: RoomId) -> RepositoryResult<usize> {
        // Two documents cannot be rewritten atomically; items go first so a
        // partial failure never leaves an orphaned item.
        let mut items = self.load_items();
        let items_before = items.len();
        items.retain(|item| item.room_id != id.get());
        if items.len() != items_before {
            self.save_collection(ITEMS_KEY, &items)?;
        }

        let mut rooms = self.load_rooms();
        let rooms_before = rooms.len();
        rooms.retain(|room| room.id != id.get());
        let affected = rooms_before - rooms.len();
        if affected > 0 {
            self.save_collection(ROOMS_KEY, &rooms)?;
        }
        Ok(affected)
    }
}

impl ItemReader for LocalStorageRepository {
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<Vec<Item>> {
        let mut items: Vec<Item> = into_domain(ITEMS_KEY, self.load_items());
        if let Some(room_id) = query.room_id {
            items.retain(|item| item.room_id == room_id);
        }
        Ok(items)
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        let items: Vec<Item> = into_domain(ITEMS_KEY, self.load_items());
        Ok(items.into_iter().find(|item| item.id == id))
    }
}

impl ItemWriter for LocalStorageRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        let mut items = self.load_items();
        let id = ItemId::new(Self::next_id(items.iter().map(|i| i.id)))?;
        let stored = StoredItem::from_new(id, item.clone());
        items.push(stored.clone());
        self.save_collection(ITEMS_KEY, &items)?;
        Ok(stored.try_into()?)
    }

    fn update_item(&self, id: ItemId, update: &ItemUpdate) -> RepositoryResult<usize> {
        let mut items = self.load_items();
        let mut affected = 0;
        for item in items.iter_mut().filter(|i| i.id == id.get()) {
            item.name = update.name.as_str().to_string();
            item.quantity = update.quantity.get();
            item.cost_per_unit = update.cost_per_unit.get();
            affected += 1;
        }
        if affected > 0 {
            self.save_collection(ITEMS_KEY, &items)?;
        }
        Ok(affected)
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize> {
        let mut items = self.load_items();
        let before = items.len();
        items.retain(|item| item.id != id.get());
        let affected = before - items.len();
        if affected > 0 {
            self.save_collection(ITEMS_KEY, &items)?;
        }
        Ok(affected)
    }
}
