//! Hero banner background selection.

use crate::media::MediaFile;
use crate::types::HeroSectionData;
use tracing::debug;

/// What fills the hero banner behind the title.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum HeroBackground {
    /// Embedded video page (e.g. a YouTube embed URL)
    Iframe(String),
    Image(String),
    /// Video file, usually a data URL from a dropped file
    Video(String),
    /// Plain color block when nothing else is available
    #[default]
    Solid,
}

impl HeroBackground {
    /// Initial background: the video embed wins over the still image.
    pub fn from_data(data: &HeroSectionData) -> Self {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|s| !s.is_empty()).cloned();

        if let Some(url) = non_empty(&data.video_url) {
            HeroBackground::Iframe(url)
        } else if let Some(url) = non_empty(&data.image_url) {
            HeroBackground::Image(url)
        } else {
            HeroBackground::Solid
        }
    }

    /// Replace the background with a dropped file.
    ///
    /// Videos play as a looping video; every other file is shown as an
    /// image, whatever its type.
    pub fn drop_file(&mut self, file: &MediaFile) {
        let src = file.to_data_url();
        *self = if file.is_video() {
            HeroBackground::Video(src)
        } else {
            HeroBackground::Image(src)
        };
        debug!(name = %file.name, mime = %file.mime, "Hero background replaced");
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            HeroBackground::Iframe(src)
            | HeroBackground::Image(src)
            | HeroBackground::Video(src) => Some(src),
            HeroBackground::Solid => None,
        }
    }
}
