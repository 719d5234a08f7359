//! Photo Store
//!
//! Photos are kept inline as `data:` URLs, newest first. They are never
//! edited after creation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::storage::{KeyValueStorage, Slot, PHOTOS_SLOT};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A stored photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

/// Encode raw file bytes as a self-describing `data:` URL
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = mime_type.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Ordered photo collection, most recently added first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoList {
    items: Vec<PhotoItem>,
}

impl PhotoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PhotoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PhotoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a photo. A blank title falls back to the file name.
    pub fn add(
        &mut self,
        title: &str,
        file_name: &str,
        mime_type: &str,
        bytes: &[u8],
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let title = match title.trim() {
            "" => file_name.to_string(),
            t => t.to_string(),
        };
        let item = PhotoItem {
            id: Uuid::new_v4(),
            title,
            created_at,
            data_url: encode_data_url(mime_type, bytes),
        };
        let id = item.id;
        self.items.insert(0, item);
        id
    }

    /// Remove a photo. Returns false if no photo has this id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|photo| photo.id != id);
        self.items.len() != before
    }
}

/// Photo list mirrored into a storage slot
#[derive(Debug)]
pub struct PhotoStore<S> {
    list: PhotoList,
    storage: S,
    slot: Slot<PhotoItem>,
}

impl<S: KeyValueStorage> PhotoStore<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with_slot(storage, Slot::new(PHOTOS_SLOT))
    }

    pub fn open_with_slot(storage: S, slot: Slot<PhotoItem>) -> Self {
        let list = PhotoList::from_items(slot.load(&storage));
        Self { list, storage, slot }
    }

    pub fn list(&self) -> &PhotoList {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Store a photo read from a file, stamped with the clock's instant
    pub fn add(
        &mut self,
        title: &str,
        file_name: &str,
        mime_type: &str,
        bytes: &[u8],
        clock: &impl Clock,
    ) -> Uuid {
        let id = self.list.add(title, file_name, mime_type, bytes, clock.now());
        log::debug!("added photo {} ({} bytes)", id, bytes.len());
        self.persist();
        id
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let changed = self.list.delete(id);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.storage, self.list.items()) {
            log::warn!("failed to write slot {}: {}", self.slot.key(), e);
        }
    }
}
