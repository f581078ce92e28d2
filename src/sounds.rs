//! In-place photo edits for the lineup.

use crate::media::MediaFile;
use crate::types::SoundsSectionData;
use tracing::debug;

/// Session copy of the lineup that visitors can re-photograph.
///
/// Edits are never persisted; a new session starts from the content model.
#[derive(Clone, Debug)]
pub struct SoundsEditor {
    data: SoundsSectionData,
}

impl SoundsEditor {
    pub fn new(data: &SoundsSectionData) -> Self {
        Self { data: data.clone() }
    }

    pub fn data(&self) -> &SoundsSectionData {
        &self.data
    }

    /// Replace the live band photo. Ignored without a band or for non-images.
    pub fn set_band_image(&mut self, file: &MediaFile) -> bool {
        if !file.is_image() {
            return false;
        }
        let Some(band) = self.data.live_band.as_mut() else {
            return false;
        };
        band.image_url = file.to_data_url();
        debug!(band = %band.name, "Band image replaced");
        true
    }

    /// Replace one performer's photo, addressed by floor and position.
    ///
    /// Out-of-range indices and non-images are ignored.
    pub fn set_performer_image(
        &mut self,
        artist_index: usize,
        performer_index: usize,
        file: &MediaFile,
    ) -> bool {
        if !file.is_image() {
            return false;
        }
        let Some(performer) = self
            .data
            .artists
            .get_mut(artist_index)
            .and_then(|a| a.performers.get_mut(performer_index))
        else {
            return false;
        };
        performer.image_url = Some(file.to_data_url());
        debug!(performer = %performer.name, "Performer image replaced");
        true
    }
}
