//! Opaque bitmap handles and a name-based bitmap store.
//!
//! Decoding pixels is the host's job. Widgets only need to know which bitmap
//! to draw and how big it is, so a [`Bitmap`] is a small `Copy` handle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier assigned to a bitmap by its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitmapId(pub u32);

/// Handle to a decoded bitmap owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitmap {
    /// Store-assigned identifier
    pub id: BitmapId,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Bitmap {
    /// Create a bitmap handle.
    #[must_use]
    pub const fn new(id: BitmapId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Pixel size as floats.
    #[must_use]
    pub fn size(&self) -> crate::Size {
        crate::Size::new(self.width as f32, self.height as f32)
    }
}

/// Registry resolving resource names to bitmap handles.
///
/// Unknown names resolve to `None` instead of failing, the same way a
/// missing drawable reference resolves to an empty drawable.
#[derive(Debug, Default, Clone)]
pub struct BitmapStore {
    by_name: HashMap<String, Bitmap>,
    next_id: u32,
}

impl BitmapStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bitmap under `name`, returning its handle.
    ///
    /// Re-registering a name replaces the previous handle.
    pub fn insert(&mut self, name: impl Into<String>, width: u32, height: u32) -> Bitmap {
        let bitmap = Bitmap::new(BitmapId(self.next_id), width, height);
        self.next_id += 1;
        self.by_name.insert(name.into(), bitmap);
        bitmap
    }

    /// Look up a bitmap by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Bitmap> {
        self.by_name.get(name).copied()
    }

    /// Resolve an optional resource reference.
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> Option<Bitmap> {
        let name = name?;
        let found = self.get(name);
        if found.is_none() {
            tracing::warn!(name, "bitmap not found, using empty drawable");
        }
        found
    }

    /// Name a bitmap was registered under.
    #[must_use]
    pub fn name_of(&self, bitmap: Bitmap) -> Option<&str> {
        self.by_name
            .iter()
            .find(|(_, b)| **b == bitmap)
            .map(|(name, _)| name.as_str())
    }

    /// Number of registered bitmaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let mut store = BitmapStore::new();
        let a = store.insert("star", 24, 24);
        let b = store.insert("star_outline", 24, 24);
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_and_name_of() {
        let mut store = BitmapStore::new();
        let heart = store.insert("heart", 32, 16);
        assert_eq!(store.get("heart"), Some(heart));
        assert_eq!(store.name_of(heart), Some("heart"));
        assert_eq!(heart.size(), crate::Size::new(32.0, 16.0));
    }

    #[test]
    fn test_resolve_missing_is_none() {
        let store = BitmapStore::new();
        assert!(store.is_empty());
        assert_eq!(store.resolve(Some("missing")), None);
        assert_eq!(store.resolve(None), None);
    }

    #[test]
    fn test_reinsert_replaces_handle() {
        let mut store = BitmapStore::new();
        let first = store.insert("icon", 8, 8);
        let second = store.insert("icon", 16, 16);
        assert_ne!(first, second);
        assert_eq!(store.get("icon"), Some(second));
        assert_eq!(store.len(), 1);
    }
}
