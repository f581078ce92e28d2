use crate::types::{GalleryItem, GallerySectionData};
use maud::{Markup, html};

fn item(item: &GalleryItem) -> Markup {
    html! {
        div class="overflow-hidden rounded-lg shadow-lg transform transition-transform duration-300 ease-in-out hover:scale-105 group aspect-square"
            aria-label=(item.alt) role="img" {
            img src=(item.src) alt=(item.alt) class="w-full h-full object-cover";
        }
    }
}

/// Image grid in list order, or an empty-state prompt when there are none.
pub fn gallery(data: &GallerySectionData, items: &[GalleryItem]) -> Markup {
    html! {
        section class="py-20 px-6 bg-gray-900 text-center relative"
            aria-label="Experience the Vibe gallery" data-drop-target="/gallery" data-prepend {
            div class="drop-overlay absolute inset-0 bg-black bg-opacity-80 items-center justify-center z-30 border-4 border-dashed border-orange-500 pointer-events-none" {
                p class="text-2xl font-bold text-white" { "Drop images to add to gallery" }
            }
            div class="max-w-6xl mx-auto" {
                h2 class="font-cinzel text-4xl md:text-5xl font-bold text-orange-400 mb-6" { (data.title) }
                div class="w-24 h-1 bg-orange-500 mx-auto mb-8" {}
                @if items.is_empty() {
                    div class="flex items-center justify-center h-64 border-2 border-dashed border-gray-600 rounded-lg bg-gray-800/50" {
                        p class="text-gray-400 text-xl" { "Drop images here to build your gallery" }
                    }
                } @else {
                    div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4 md:gap-6" {
                        @for entry in items {
                            (item(entry))
                        }
                    }
                }
                form class="mt-8" method="post" action="/gallery/reset" {
                    button type="submit"
                        class="bg-gray-700 text-white font-bold py-2 px-6 rounded-full hover:bg-gray-600 transition-colors duration-300 text-sm" {
                        "Reset Gallery"
                    }
                }
            }
        }
    }
}
