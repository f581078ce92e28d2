use super::icons;
use crate::types::AboutSectionData;
use maud::{Markup, PreEscaped, html};

pub fn about(data: &AboutSectionData) -> Markup {
    html! {
        section class="py-20 px-6 bg-gradient-to-b from-black to-gray-900 text-center" {
            div class="max-w-4xl mx-auto" {
                h2 class="font-cinzel text-4xl md:text-5xl font-bold text-orange-400 mb-6" { (data.title) }
                div class="w-24 h-1 bg-orange-500 mx-auto mb-8" {}
                div class="text-gray-300 leading-relaxed text-lg space-y-4" {
                    @for paragraph in &data.description {
                        p { (paragraph) }
                    }
                }
                p class="font-bold text-orange-300 text-xl my-8 tracking-wider uppercase" {
                    (data.call_to_action)
                }
                div class="mt-10 text-left max-w-2xl mx-auto" {
                    ul class="space-y-4" {
                        @for feature in &data.features {
                            li class="flex items-start" {
                                (PreEscaped(icons::SKULL))
                                span class="text-gray-200 text-lg" { (feature) }
                            }
                        }
                    }
                }
            }
        }
    }
}
