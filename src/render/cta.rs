use crate::constants::TICKET_URL;
use crate::newsletter::NewsletterForm;
use crate::types::CtaSectionData;
use maud::{Markup, html};

/// Ticket link plus the newsletter form (or its thank-you view).
pub fn cta(data: &CtaSectionData, form: &NewsletterForm) -> Markup {
    html! {
        section id="cta" class="py-20 px-6 text-center bg-gradient-to-t from-black to-gray-900" {
            div class="max-w-2xl mx-auto" {
                h2 class="font-cinzel text-4xl md:text-5xl font-bold text-orange-400 mb-4" { (data.title) }
                p class="text-gray-300 mb-8" { (data.description) }
                a href=(TICKET_URL) target="_blank" rel="noopener noreferrer"
                    class="inline-block bg-orange-500 text-black font-bold text-lg py-4 px-10 rounded-full uppercase tracking-wider hover:bg-orange-400 transform hover:scale-110 transition-all duration-300 shadow-lg shadow-orange-500/30" {
                    "Secure Your Spot"
                }

                div class="mt-16 pt-12 border-t border-gray-700/50" {
                    h3 class="font-cinzel text-2xl md:text-3xl font-bold text-orange-300 mb-4 tracking-wider" {
                        "STAY UPDATED"
                    }
                    p class="text-gray-400 mb-8" {
                        "Join our newsletter for exclusive updates, announcements, and special offers."
                    }
                    @if form.is_submitted() {
                        div class="text-green-400 text-xl font-semibold" {
                            p { "🎉 Thank you for subscribing! 🎉" }
                            p class="text-sm text-gray-400 mt-2" { "You're on the list for future events." }
                        }
                    } @else {
                        form method="post" action="/newsletter" novalidate
                            class="flex flex-col sm:flex-row gap-4 max-w-lg mx-auto" {
                            input type="email" name="email" placeholder="Enter your email address"
                                aria-label="Email address for newsletter" required
                                class="flex-grow bg-gray-800 text-white placeholder-gray-500 px-6 py-4 rounded-full border-2 border-gray-600 focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent transition-all duration-300 w-full";
                            button type="submit"
                                class="bg-orange-600 text-white font-bold py-4 px-8 rounded-full uppercase tracking-wider hover:bg-orange-500 transform hover:scale-105 transition-all duration-300 shadow-lg shadow-orange-500/30 shrink-0" {
                                "Subscribe"
                            }
                        }
                    }
                    @if let Some(message) = form.error() {
                        p class="text-red-400 mt-3 text-sm" { (message) }
                    }
                }
            }
        }
    }
}
