//! Lineup and practical info.
//!
//! Every photo sits inside a dropzone that also opens a file picker on
//! click. Performers without a photo get no dropzone.

use super::icons;
use crate::constants::{BOARDING_MAP_URL, RESERVATION_PHONE_URI};
use crate::types::{Artist, LiveBand, Performer, SoundsSectionData};
use maud::{Markup, PreEscaped, html};

#[derive(Clone, Copy)]
enum Shape {
    Rect,
    Circle,
}

fn image_dropzone(target: &str, shape: Shape, class: &str, content: Markup) -> Markup {
    let overlay_shape = match shape {
        Shape::Rect => "rounded-lg",
        Shape::Circle => "rounded-full",
    };
    html! {
        div class={ "relative group cursor-pointer " (class) } data-drop-target=(target) {
            input type="file" class="hidden" accept="image/*";
            (content)
            div class={ "absolute inset-0 bg-black bg-opacity-60 flex items-center justify-center transition-opacity duration-300 opacity-0 group-hover:opacity-100 " (overlay_shape) } {
                p class="text-white text-center font-bold text-sm px-2" { "Change Photo" }
            }
        }
    }
}

fn performer(performer: &Performer, target: &str) -> Markup {
    html! {
        div {
            @if let Some(url) = &performer.image_url {
                (image_dropzone(target, Shape::Circle, "w-28 h-28 mx-auto", html! {
                    img src=(url) alt=(performer.name)
                        class="w-28 h-28 object-cover rounded-full mx-auto border-2 border-orange-500/50 shadow-md transition-opacity duration-300 group-hover:opacity-40";
                }))
            }
            p class="font-bold text-xl text-white mt-3" { (performer.name) }
            p class="text-sm text-gray-400" { (performer.info) }
        }
    }
}

fn artist_card(artist: &Artist, artist_index: usize) -> Markup {
    html! {
        div class="bg-gray-800 bg-opacity-50 border border-orange-500/30 rounded-lg p-6 transform hover:scale-105 hover:border-orange-500 transition-all duration-300 shadow-lg h-full" {
            div class="text-center" {
                h3 class="text-2xl font-bold text-orange-400" { (artist.floor) }
                p class="text-lg font-semibold text-white mb-4" { (artist.genre) }
                div class="border-t border-gray-600 my-4" {}
                div class="space-y-4" {
                    @for (index, entry) in artist.performers.iter().enumerate() {
                        (performer(entry, &format!("/sounds/{artist_index}/{index}")))
                    }
                }
            }
        }
    }
}

fn live_band(band: &LiveBand) -> Markup {
    html! {
        div class="mb-16" {
            h3 class="text-3xl font-bold text-orange-300 mb-8 tracking-wider uppercase" { "Live Performance By" }
            div class="bg-gray-800 bg-opacity-50 border border-orange-500/30 rounded-lg p-6 md:p-8 flex flex-col items-center gap-6 max-w-lg mx-auto shadow-lg" {
                (image_dropzone("/sounds/band", Shape::Rect, "w-full", html! {
                    img src=(band.image_url) alt=(band.name)
                        class="w-full h-auto rounded-lg shadow-md transition-opacity duration-300 group-hover:opacity-40";
                }))
                div class="text-center mt-4" {
                    h4 class="font-cinzel text-4xl font-bold text-white" { (band.name) }
                    p class="text-lg text-gray-400 mt-2" { (band.info) }
                }
            }
            div class="border-t border-gray-700 my-12 max-w-sm mx-auto" {}
        }
    }
}

fn info_block(heading: &str, body: Markup) -> Markup {
    html! {
        div class="mt-16 pt-12 border-t border-gray-700/50" {
            div class="max-w-2xl mx-auto" {
                h3 class="font-cinzel text-3xl md:text-4xl font-bold text-orange-300 mb-8 tracking-wider uppercase" { (heading) }
                (body)
            }
        }
    }
}

pub fn sounds(data: &SoundsSectionData) -> Markup {
    html! {
        section class="py-20 px-6 bg-gray-900" {
            div class="max-w-5xl mx-auto text-center" {
                h2 class="font-cinzel text-4xl md:text-5xl font-bold text-orange-400 mb-4" { (data.title) }
                p class="text-gray-300 mb-12 max-w-2xl mx-auto" { (data.description) }

                @if let Some(band) = &data.live_band {
                    (live_band(band))
                }

                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for (index, artist) in data.artists.iter().enumerate() {
                        (artist_card(artist, index))
                    }
                }

                (info_block("VIP Tables + Bottle Service", html! {
                    div class="bg-gray-800 bg-opacity-50 border border-orange-500/30 rounded-lg p-8 shadow-lg" {
                        p class="text-gray-300 mb-8 text-lg" {
                            "Elevate your experience. Reserve a private table for you and your guests."
                        }
                        a href=(RESERVATION_PHONE_URI)
                            class="inline-flex items-center bg-orange-500 text-black font-bold text-lg py-3 px-8 rounded-full uppercase tracking-wider hover:bg-orange-400 transform hover:scale-105 transition-all duration-300 shadow-lg shadow-orange-500/30" {
                            (PreEscaped(icons::PHONE))
                            "Call to Reserve"
                        }
                    }
                }))

                (info_block("Purchasing Group Tickets", html! {
                    div class="bg-gray-800 bg-opacity-50 border border-orange-500/30 rounded-lg p-8 shadow-lg text-left" {
                        p class="text-gray-300 text-lg leading-relaxed" {
                            "To avoid confusion, we encourage every group to board at the same time. Mary buys 6 tickets. Mary meets her 5 friends @ 8pm at entry so everyone boards at same time."
                        }
                    }
                }))

                (info_block("Boarding + Parking Info", html! {
                    div class="text-left bg-gray-800 bg-opacity-50 border border-orange-500/30 rounded-lg p-8 shadow-lg space-y-6" {
                        div {
                            h4 class="font-bold text-xl text-orange-400 mb-2" { "Boarding Details" }
                            p class="text-gray-300" { "Boarding: 8:00 PM - 9:00 PM. Gates close at 9:00 PM sharp." }
                            p class="text-gray-400 text-sm" { "Early arrival is strongly suggested." }
                        }
                        div class="border-t border-gray-700/50" {}
                        div {
                            h4 class="font-bold text-xl text-orange-400 mb-2" { "Parking Information" }
                            p class="text-gray-300" { "Paid street parking and paid parking lots are available nearby." }
                            p class="text-gray-300 mt-2 font-semibold" { "1800 N. Harbor Drive" br; "San Diego, CA 92101" }
                        }
                        div class="mt-4" {
                            iframe src=(BOARDING_MAP_URL) width="100%" height="100%" style="border: 0"
                                allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade"
                                title="Event Location Map"
                                class="rounded-lg border-2 border-orange-500/30 shadow-lg w-full h-full min-h-[300px]" {}
                        }
                    }
                }))
            }
        }
    }
}
