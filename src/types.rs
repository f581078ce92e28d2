//! Core types for the event page content model.
//!
//! Every section of the page is described by a plain value record. The
//! root [`PageData`] is supplied once at startup and never mutated; sections
//! that allow edits clone the slice they need.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Page Root
// ============================================================================

/// Root aggregate holding one record per section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// Document title
    pub page_title: String,
    pub hero_section: HeroSectionData,
    pub about_section: AboutSectionData,
    pub sounds_section: SoundsSectionData,
    pub cta_section: CtaSectionData,
    /// The gallery is optional; pages without one skip the section
    #[serde(default)]
    pub gallery_section: Option<GallerySectionData>,
    #[serde(default)]
    pub social_media: Vec<SocialMediaLink>,
}

impl PageData {
    /// Load a replacement content file written in the same camelCase shape.
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default gallery list, empty when the page has no gallery.
    pub fn default_gallery_items(&self) -> Vec<GalleryItem> {
        self.gallery_section
            .as_ref()
            .map(|g| g.items.clone())
            .unwrap_or_default()
    }
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionData {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub location: String,
    /// Embeddable video page, takes precedence over `image_url`
    #[serde(default, rename = "videoURL")]
    pub video_url: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSectionData {
    pub title: String,
    /// Paragraphs, rendered as plain text
    pub description: Vec<String>,
    pub call_to_action: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub name: String,
    pub info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Performers grouped by the floor they play on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub floor: String,
    pub genre: String,
    pub performers: Vec<Performer>,
}

/// Headline live act. Unlike [`Performer`] the image is mandatory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBand {
    pub name: String,
    pub info: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundsSectionData {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_band: Option<LiveBand>,
    pub artists: Vec<Artist>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSectionData {
    pub title: String,
    pub description: String,
}

/// An image entry with a source reference and accessible description.
///
/// `src` is either a remote URL or a base64 data URL produced from an
/// uploaded file; both are treated as opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
}

impl GalleryItem {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySectionData {
    pub title: String,
    /// Display order is list order
    pub items: Vec<GalleryItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
}
