//! HTML rendering of the page.
//!
//! Each section renderer is a pure function from its data slice (and, for
//! editable sections, its view state) to [`Markup`]. No renderer reads
//! global state and none can fail: missing data falls back to plainer
//! output.
//!
//! ## Modules
//!
//! - `hero` - banner with background and event details
//! - `about` - description, call-to-action line, feature list
//! - `sounds` - lineup, VIP tables, group tickets, boarding info
//! - `gallery` - image grid with dropzone and reset
//! - `cta` - ticket link and newsletter form
//! - `footer` - social links

mod about;
mod cta;
mod footer;
mod gallery;
mod hero;
mod icons;
mod sounds;

pub use about::about;
pub use cta::cta;
pub use footer::footer;
pub use gallery::gallery;
pub use hero::hero;
pub use sounds::sounds;

use crate::hero::HeroBackground;
use crate::newsletter::NewsletterForm;
use crate::types::{GalleryItem, PageData, SoundsSectionData};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Client script wiring `data-drop-target` elements to upload endpoints.
const DROPZONE_SCRIPT: &str = include_str!("dropzone.js");

const PAGE_STYLE: &str = "\
.drop-overlay { display: none; }\n\
.is-dragging > .drop-overlay { display: flex; }\n\
.font-cinzel { font-family: 'Cinzel', serif; }\n";

/// Per-visitor state the root renderer needs next to the content model.
#[derive(Clone, Copy, Debug)]
pub struct PageView<'a> {
    pub hero: &'a HeroBackground,
    /// Lineup including any photo edits
    pub sounds: &'a SoundsSectionData,
    /// Current gallery list; `None` renders the content-model defaults
    pub gallery: Option<&'a [GalleryItem]>,
    pub newsletter: &'a NewsletterForm,
}

/// Full document: hero, about, sounds, gallery, call-to-action, footer.
pub fn page(data: &PageData, view: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (data.page_title) }
                script src="https://cdn.tailwindcss.com" {}
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Cinzel:wght@700&display=swap";
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                div class="bg-black text-white min-h-screen antialiased" {
                    main {
                        (hero(&data.hero_section, view.hero))
                        (about(&data.about_section))
                        (sounds(view.sounds))
                        @if let Some(section) = &data.gallery_section {
                            (gallery(section, view.gallery.unwrap_or(section.items.as_slice())))
                        }
                        (cta(&data.cta_section, view.newsletter))
                    }
                    (footer(&data.social_media))
                }
                script { (PreEscaped(DROPZONE_SCRIPT)) }
            }
        }
    }
}
