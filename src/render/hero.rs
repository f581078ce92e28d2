use super::icons;
use crate::hero::HeroBackground;
use crate::types::HeroSectionData;
use maud::{Markup, PreEscaped, html};

fn background(background: &HeroBackground) -> Markup {
    match background {
        HeroBackground::Iframe(src) => html! {
            iframe class="w-full h-full object-cover" src=(src) frameborder="0"
                allow="autoplay; encrypted-media" allowfullscreen title="background-video" {}
        },
        HeroBackground::Image(src) => html! {
            div class="w-full h-full bg-cover bg-center"
                style=(format!("background-image: url({src})")) {}
        },
        HeroBackground::Video(src) => html! {
            video class="w-full h-full object-cover" src=(src) autoplay loop muted playsinline {}
        },
        HeroBackground::Solid => html! {
            div class="absolute inset-0 bg-gray-800" {}
        },
    }
}

/// Full-screen banner. The whole section accepts a dropped background file.
pub fn hero(data: &HeroSectionData, current: &HeroBackground) -> Markup {
    html! {
        section class="relative h-screen flex flex-col items-center justify-center text-center text-white overflow-hidden"
            aria-label="Hero section with event details" data-drop-target="/hero" {
            div class="drop-overlay absolute inset-0 bg-black bg-opacity-75 items-center justify-center z-30 border-4 border-dashed border-orange-500 pointer-events-none" {
                p class="text-2xl font-bold text-white" { "Drop to change background" }
            }
            div class="absolute top-0 left-0 w-full h-full bg-black opacity-60 z-10" {}
            div class="absolute top-0 left-0 w-full h-full z-0" {
                (background(current))
            }
            div class="relative z-20 p-4 max-w-3xl" {
                h2 class="text-xl md:text-2xl font-light tracking-widest text-orange-300 uppercase" { (data.subtitle) }
                h1 class="font-cinzel text-5xl md:text-8xl font-bold my-4 leading-tight shadow-lg" { (data.title) }
                div class="mt-8 space-y-3 text-sm md:text-base text-gray-200" {
                    p class="flex items-center justify-center" { (PreEscaped(icons::CALENDAR)) (data.date) }
                    p class="flex items-center justify-center" { (PreEscaped(icons::LOCATION)) (data.location) }
                }
            }
            div class="absolute bottom-8 z-20 animate-bounce" {
                (PreEscaped(icons::CHEVRON_DOWN))
            }
        }
    }
}
