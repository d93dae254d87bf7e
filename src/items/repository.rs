use serde_json::{Map, Value};

use super::types::{is_falsy, now_ms, Item};
use crate::error::{Error, Result};
use crate::storage::file::FileStore;

/// Repository implementing the four CRUD operations over the stored
/// collection.
///
/// Every operation re-reads the full document from disk and, if mutating,
/// rewrites it in full before returning. No state outlives a single call.
pub struct ItemRepository {
    store: FileStore,
}

impl ItemRepository {
    pub fn new(store: FileStore) -> Self {
        ItemRepository { store }
    }

    /// Returns the full collection in storage order.
    pub fn list(&self) -> Result<Vec<Item>> {
        self.store.read()
    }

    /// Appends a new item built from the request fields.
    ///
    /// `name` is required (falsy values rejected); `quantity` defaults to 1
    /// when absent or falsy. Any other fields in the payload are dropped.
    pub fn create(&self, fields: &Map<String, Value>) -> Result<Item> {
        let name = match fields.get("name") {
            Some(value) if !is_falsy(value) => value.clone(),
            _ => return Err(Error::Validation("Item name is required".to_string())),
        };

        let quantity = match fields.get("quantity") {
            Some(value) if !is_falsy(value) => value.clone(),
            _ => Value::from(1),
        };

        let item = Item::new(now_ms(), name, quantity);

        let mut items = self.store.read()?;
        items.push(item.clone());
        self.store.write(&items)?;

        Ok(item)
    }

    /// Shallow-merges `fields` over the first item whose id matches.
    pub fn update(&self, id: i64, fields: &Map<String, Value>) -> Result<Item> {
        let mut items = self.store.read()?;

        let index = items
            .iter()
            .position(|item| item.id() == Some(id))
            .ok_or(Error::NotFound)?;

        items[index].merge(fields);
        let updated = items[index].clone();

        self.store.write(&items)?;

        Ok(updated)
    }

    /// Removes every item whose id matches (duplicates included).
    pub fn delete(&self, id: i64) -> Result<()> {
        let items = self.store.read()?;
        let original_len = items.len();

        let remaining: Vec<Item> = items
            .into_iter()
            .filter(|item| item.id() != Some(id))
            .collect();

        if remaining.len() == original_len {
            return Err(Error::NotFound);
        }

        self.store.write(&remaining)?;

        Ok(())
    }
}
