//! One visitor's view of the page.
//!
//! A session pairs the immutable content model with the state each editable
//! section keeps: the hero background, the lineup photos, the gallery list
//! and the newsletter form. Gallery and newsletter share the persisted
//! store; hero and lineup edits end with the session.

use crate::gallery::GalleryStore;
use crate::hero::HeroBackground;
use crate::media::MediaFile;
use crate::newsletter::NewsletterForm;
use crate::render::{self, PageView};
use crate::sounds::SoundsEditor;
use crate::storage::KeyValueStore;
use crate::types::PageData;
use std::sync::Arc;

pub struct Session<S: KeyValueStore> {
    content: PageData,
    store: Arc<S>,
    hero: HeroBackground,
    sounds: SoundsEditor,
    gallery: Option<GalleryStore<Arc<S>>>,
    newsletter: NewsletterForm,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(content: PageData, store: Arc<S>) -> Self {
        let hero = HeroBackground::from_data(&content.hero_section);
        let sounds = SoundsEditor::new(&content.sounds_section);
        let gallery = content
            .gallery_section
            .as_ref()
            .map(|section| GalleryStore::open(Arc::clone(&store), section.items.clone()));

        Self {
            content,
            store,
            hero,
            sounds,
            gallery,
            newsletter: NewsletterForm::new(),
        }
    }

    pub fn content(&self) -> &PageData {
        &self.content
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hero(&self) -> &HeroBackground {
        &self.hero
    }

    pub fn sounds(&self) -> &SoundsEditor {
        &self.sounds
    }

    /// `None` when the content model has no gallery section.
    pub fn gallery(&self) -> Option<&GalleryStore<Arc<S>>> {
        self.gallery.as_ref()
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn drop_hero_file(&mut self, file: &MediaFile) {
        self.hero.drop_file(file);
    }

    pub fn set_band_image(&mut self, file: &MediaFile) -> bool {
        self.sounds.set_band_image(file)
    }

    pub fn set_performer_image(&mut self, artist: usize, performer: usize, file: &MediaFile) -> bool {
        self.sounds.set_performer_image(artist, performer, file)
    }

    /// Add files to the gallery. Returns 0 when the page has no gallery.
    pub fn add_gallery_files(&mut self, files: &[MediaFile]) -> usize {
        self.gallery.as_mut().map_or(0, |g| g.add_files(files))
    }

    pub fn replace_gallery_src(&mut self, index: usize, file: &MediaFile) -> bool {
        self.gallery
            .as_mut()
            .is_some_and(|g| g.replace_src(index, file))
    }

    pub fn reset_gallery(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.reset();
        }
    }

    pub fn submit_newsletter(&mut self, email: &str) {
        self.newsletter.submit(email, self.store.as_ref());
    }

    pub fn view(&self) -> PageView<'_> {
        PageView {
            hero: &self.hero,
            sounds: self.sounds.data(),
            gallery: self.gallery.as_ref().map(|g| g.items()),
            newsletter: &self.newsletter,
        }
    }

    /// Render the whole page as an HTML document.
    pub fn render(&self) -> String {
        render::page(&self.content, &self.view()).into_string()
    }
}
