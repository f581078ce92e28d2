//! Gallery list backed by persisted storage.
//!
//! The list starts from whatever was persisted under
//! [`GALLERY_STORAGE_KEY`], falling back to the content-model defaults, and
//! every change is written straight back. Persistence failures are logged
//! and otherwise ignored: the in-memory list stays authoritative for the
//! session.

use crate::constants::GALLERY_STORAGE_KEY;
use crate::media::MediaFile;
use crate::storage::{KeyValueStore, load_json, save_json};
use crate::types::GalleryItem;
use tracing::{debug, error, warn};

pub struct GalleryStore<S: KeyValueStore> {
    store: S,
    defaults: Vec<GalleryItem>,
    items: Vec<GalleryItem>,
}

impl<S: KeyValueStore> GalleryStore<S> {
    /// Load the persisted list, or `defaults` when absent or unreadable.
    ///
    /// The resulting list is written back immediately, so a fallback also
    /// lands in storage.
    pub fn open(store: S, defaults: Vec<GalleryItem>) -> Self {
        let items = match load_json::<Vec<GalleryItem>, _>(&store, GALLERY_STORAGE_KEY) {
            Ok(Some(items)) => {
                debug!(count = items.len(), "Loaded persisted gallery");
                items
            }
            Ok(None) => defaults.clone(),
            Err(e) => {
                error!("Failed to load gallery items from storage: {}", e);
                defaults.clone()
            }
        };

        let gallery = Self {
            store,
            defaults,
            items,
        };
        gallery.persist();
        gallery
    }

    /// Current list in display order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn defaults(&self) -> &[GalleryItem] {
        &self.defaults
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prepend every image among `files`, keeping drop order.
    ///
    /// Non-image files are skipped without complaint. Returns how many
    /// entries were added; zero leaves the list and storage untouched.
    pub fn add_files(&mut self, files: &[MediaFile]) -> usize {
        let new_items: Vec<GalleryItem> = files
            .iter()
            .filter(|f| f.is_image())
            .map(|f| GalleryItem::new(f.to_data_url(), f.name.clone()))
            .collect();

        let skipped = files.len() - new_items.len();
        if skipped > 0 {
            debug!(skipped, "Ignored non-image files dropped on gallery");
        }
        if new_items.is_empty() {
            return 0;
        }

        let added = new_items.len();
        self.items.splice(0..0, new_items);
        self.persist();
        added
    }

    /// Overwrite the `src` of the entry at `index` with an image file.
    ///
    /// Returns false (and changes nothing) for non-images or a bad index.
    pub fn replace_src(&mut self, index: usize, file: &MediaFile) -> bool {
        if !file.is_image() {
            return false;
        }
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.src = file.to_data_url();
        self.persist();
        true
    }

    /// Forget every edit: clear the persisted key and restore the defaults.
    ///
    /// There is no undo; uploaded images are gone afterwards.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(GALLERY_STORAGE_KEY) {
            error!("Failed to clear gallery items from storage: {}", e);
        }
        self.items = self.defaults.clone();
    }

    fn persist(&self) {
        if let Err(e) = save_json(&self.store, GALLERY_STORAGE_KEY, &self.items) {
            warn!("Failed to save gallery items to storage: {}", e);
        }
    }
}
