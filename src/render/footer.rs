use crate::types::SocialMediaLink;
use maud::{Markup, html};

pub fn footer(links: &[SocialMediaLink]) -> Markup {
    html! {
        footer class="bg-black border-t border-gray-800 py-10 px-6 text-center" {
            @if !links.is_empty() {
                nav class="flex justify-center gap-8 mb-6" aria-label="Social media" {
                    @for link in links {
                        a href=(link.url) target="_blank" rel="noopener noreferrer"
                            class="text-gray-400 hover:text-orange-400 uppercase tracking-wider text-sm transition-colors duration-300" {
                            (link.platform)
                        }
                    }
                }
            }
            p class="text-gray-600 text-xs" { "© Sabor On The Bay. All rights reserved." }
        }
    }
}
