//! Built-in content for the Dia De Los Muertos cruise.

use crate::types::{
    AboutSectionData, Artist, CtaSectionData, GalleryItem, GallerySectionData, HeroSectionData,
    LiveBand, PageData, Performer, SocialMediaLink, SoundsSectionData,
};

fn performer(name: &str, info: &str, image_url: &str) -> Performer {
    Performer {
        name: name.to_string(),
        info: info.to_string(),
        image_url: Some(image_url.to_string()),
    }
}

fn floor(floor: &str, genre: &str, performers: Vec<Performer>) -> Artist {
    Artist {
        floor: floor.to_string(),
        genre: genre.to_string(),
        performers,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl PageData {
    /// Content for the 2025 San Diego cruise.
    pub fn sabor_on_the_bay() -> Self {
        Self {
            page_title: "Sabor On The Bay - Dia De Los Muertos Cruise".to_string(),
            hero_section: HeroSectionData {
                title: "Día De Los Muertos Cruise".to_string(),
                subtitle: "America's Largest Latin Boat Cruise Party".to_string(),
                date: "October 25, 2025 | Boarding at 8:00 PM, Sailing from 9:00 PM - 12:00 AM"
                    .to_string(),
                location: "Inspiration Hornblower Yacht, San Diego, CA".to_string(),
                video_url: Some(
                    "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=1&loop=1&playlist=dQw4w9WgXcQ&controls=0&showinfo=0&autohide=1&modestbranding=1"
                        .to_string(),
                ),
                image_url: None,
            },
            about_section: AboutSectionData {
                title: "About the Event".to_string(),
                description: strings(&[
                    "Sabor on the Bay returns to America’s Finest City for its 3rd annual “Dia de los Muertos” boat party. There is no other event like this in the world! Experience the largest + spookiest yacht in California along with Ocean Rooftop dancing!",
                ]),
                call_to_action: "GUARANTEED TO SELL OUT– purchase your tickets today!".to_string(),
                features: strings(&[
                    "3 hour cruise w/ breathtaking views of San Diego Bay",
                    "3 floors of music (Cumbia, Reggaeton + Bachata)",
                    "1,200 guests",
                    "Multimillion Dollar Luxury Yacht",
                    "5 Fully Stocked Bars",
                    "Massive Rooftop Sky Deck",
                    "Laser Light Show (Reggaeton Floor)",
                    "Photographers",
                    "Halloween Costume Party w/ Dia de Los Muertos Decor",
                ]),
            },
            sounds_section: SoundsSectionData {
                title: "The Sounds of the Night".to_string(),
                description: "Get ready to move with the best Latin beats from across the region, with each floor offering a unique flavor.".to_string(),
                live_band: Some(LiveBand {
                    name: "CUMBIA BRAVA".to_string(),
                    info: "Based in Los Angeles".to_string(),
                    image_url: "/user/f4f3d1e1-e630-4e3f-a3ac-6e47d10c0e52/image.jpeg".to_string(),
                }),
                artists: vec![
                    floor(
                        "Floor 1",
                        "Cumbia + Salsa",
                        vec![performer(
                            "DJ FARLEY",
                            "Catch him at TangoDelRey",
                            "/user/3644f1c7-c598-4395-9769-1c93a8d8e575/image.jpeg",
                        )],
                    ),
                    floor(
                        "Floor 2",
                        "Reggaeton",
                        vec![performer(
                            "DJ RAGS",
                            "One of California's best",
                            "/user/e8c89b88-15aa-4c28-98e3-066c0d6f43fd/image.jpeg",
                        )],
                    ),
                    floor(
                        "Rooftop",
                        "Bachata",
                        vec![performer(
                            "DJ ARGENIS",
                            "Dominican flavor",
                            "/user/18146740-4131-4876-b605-64d1f2e96414/image.jpeg",
                        )],
                    ),
                ],
            },
            cta_section: CtaSectionData {
                title: "Don't Miss Out!".to_string(),
                description: "This event is guaranteed to sell out! Secure your spot on the biggest Halloween cruise party of the year and become part of the celebration.".to_string(),
            },
            gallery_section: Some(GallerySectionData {
                title: "Experience the Vibe".to_string(),
                items: vec![
                    GalleryItem::new("/gallery/yacht-at-night.jpeg", "The yacht lit up on San Diego Bay"),
                    GalleryItem::new("/gallery/rooftop-deck.jpeg", "Dancing on the rooftop sky deck"),
                    GalleryItem::new("/gallery/catrina-costumes.jpeg", "Guests in Catrina costumes"),
                    GalleryItem::new("/gallery/laser-show.jpeg", "Laser light show on the reggaeton floor"),
                    GalleryItem::new("/gallery/live-band.jpeg", "Live cumbia on the main stage"),
                    GalleryItem::new("/gallery/skyline.jpeg", "The downtown skyline from the water"),
                ],
            }),
            social_media: vec![
                SocialMediaLink {
                    platform: "Instagram".to_string(),
                    url: "https://www.instagram.com/saboronthebay/".to_string(),
                },
                SocialMediaLink {
                    platform: "Website".to_string(),
                    url: "http://www.saboronthebay.com".to_string(),
                },
            ],
        }
    }
}

impl Default for PageData {
    fn default() -> Self {
        Self::sabor_on_the_bay()
    }
}
