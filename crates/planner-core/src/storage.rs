//! Persistence Adapter
//!
//! Collections are mirrored into named slots of a string key-value store
//! (the browser's `localStorage` in production, `MemoryStorage` in tests).
//! Every write replaces the whole slot.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PlannerResult;

/// Default slot holding the todo list
pub const TODOS_SLOT: &str = "couple-planner.todos";
/// Default slot holding the photo list
pub const PHOTOS_SLOT: &str = "couple-planner.photos";

/// String key-value backend
pub trait KeyValueStorage {
    /// Read a value, `Ok(None)` if the key is absent
    fn get_item(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> PlannerResult<()>;

    /// Remove a key
    fn remove_item(&self, key: &str) -> PlannerResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> PlannerResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> PlannerResult<()> {
        (**self).remove_item(key)
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value of a key, bypassing `Result`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PlannerResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> PlannerResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Named slot holding a JSON array of `T`
#[derive(Debug)]
pub struct Slot<T> {
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> Slot<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decode the slot without swallowing errors
    pub fn try_load(&self, storage: &impl KeyValueStorage) -> PlannerResult<Vec<T>> {
        match storage.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Decode the slot; a missing or unreadable slot yields an empty list.
    ///
    /// The unreadable value is left in place until the next `save`.
    pub fn load(&self, storage: &impl KeyValueStorage) -> Vec<T> {
        match self.try_load(storage) {
            Ok(items) => {
                log::debug!("loaded {} entries from slot {}", items.len(), self.key);
                items
            }
            Err(e) => {
                log::warn!("slot {} is unreadable, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the whole collection
    pub fn save(&self, storage: &impl KeyValueStorage, items: &[T]) -> PlannerResult<()> {
        let json = serde_json::to_string(items)?;
        storage.set_item(&self.key, &json)
    }
}
