//! Unit tests for render module.

use crate::helpers::{TestPageBuilder, sample_items};
use sabor::constants::{BOARDING_MAP_URL, RESERVATION_PHONE_URI, TICKET_URL};
use sabor::hero::HeroBackground;
use sabor::newsletter::NewsletterForm;
use sabor::render::{self, PageView};
use sabor::types::{AboutSectionData, CtaSectionData, GallerySectionData, PageData, SocialMediaLink};

fn render_page(page: &PageData, form: &NewsletterForm) -> String {
    let hero = HeroBackground::from_data(&page.hero_section);
    let view = PageView {
        hero: &hero,
        sounds: &page.sounds_section,
        gallery: None,
        newsletter: form,
    };
    render::page(page, &view).into_string()
}

#[test]
fn test_page_sections_in_fixed_order() {
    let page = PageData::sabor_on_the_bay();
    let html = render_page(&page, &NewsletterForm::new());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Sabor On The Bay - Dia De Los Muertos Cruise</title>"));

    let order = [
        "Hero section with event details",
        "About the Event",
        "The Sounds of the Night",
        "Experience the Vibe",
        "Miss Out!",
        "Instagram",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_page_without_gallery_skips_section() {
    let page = TestPageBuilder::new().without_gallery().build();
    let html = render_page(&page, &NewsletterForm::new());
    assert!(!html.contains("data-drop-target=\"/gallery\""));
    assert!(!html.contains("Reset Gallery"));
}

#[test]
fn test_hero_backgrounds() {
    let data = PageData::sabor_on_the_bay().hero_section;

    let iframe = render::hero(&data, &HeroBackground::Iframe("https://v.example/embed".into())).into_string();
    assert!(iframe.contains("<iframe"));
    assert!(iframe.contains("src=\"https://v.example/embed\""));

    let image = render::hero(&data, &HeroBackground::Image("/bg.jpeg".into())).into_string();
    assert!(image.contains("background-image: url(/bg.jpeg)"));

    let video = render::hero(&data, &HeroBackground::Video("data:video/mp4;base64,AA==".into())).into_string();
    assert!(video.contains("<video"));
    assert!(video.contains("autoplay"));

    let solid = render::hero(&data, &HeroBackground::Solid).into_string();
    assert!(solid.contains("bg-gray-800"));
    assert!(!solid.contains("<iframe"));
}

#[test]
fn test_hero_escapes_text() {
    let mut data = PageData::sabor_on_the_bay().hero_section;
    data.title = "<script>alert(1)</script>".to_string();
    let html = render::hero(&data, &HeroBackground::Solid).into_string();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn test_about_renders_paragraphs_and_features() {
    let data = AboutSectionData {
        title: "About".to_string(),
        description: vec!["First **bold**".to_string(), "Second".to_string()],
        call_to_action: "Buy now".to_string(),
        features: vec!["Bars".to_string(), "Lasers".to_string()],
    };
    let html = render::about(&data).into_string();

    assert!(html.contains("<p>First **bold**</p>"));
    assert!(html.contains("<p>Second</p>"));
    assert!(html.contains("Buy now"));
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn test_about_paragraphs_are_plain_escaped_text() {
    let data = AboutSectionData {
        title: "About".to_string(),
        description: vec![
            "Tickets <img src=x onerror=alert(1)> go fast".to_string(),
            "1. floor has *cumbia*".to_string(),
            "# Not a heading".to_string(),
        ],
        call_to_action: String::new(),
        features: Vec::new(),
    };
    let html = render::about(&data).into_string();

    assert!(!html.contains("<img src=x"));
    assert!(html.contains("<p>Tickets &lt;img src=x onerror=alert(1)&gt; go fast</p>"));
    assert!(html.contains("<p>1. floor has *cumbia*</p>"));
    assert!(html.contains("<p># Not a heading</p>"));
    assert!(!html.contains("<ol"));
    assert!(!html.contains("<em>"));
    assert!(!html.contains("<h1"));
}

#[test]
fn test_sounds_dropzones_and_links() {
    let page = PageData::sabor_on_the_bay();
    let html = render::sounds(&page.sounds_section).into_string();

    assert!(html.contains("Live Performance By"));
    assert!(html.contains("data-drop-target=\"/sounds/band\""));
    assert!(html.contains("data-drop-target=\"/sounds/0/0\""));
    assert!(html.contains("data-drop-target=\"/sounds/2/0\""));
    assert!(html.contains(&format!("href=\"{RESERVATION_PHONE_URI}\"")));
    assert!(html.contains(&BOARDING_MAP_URL.replace('&', "&amp;")));
}

#[test]
fn test_sounds_performer_without_image_has_no_dropzone() {
    let mut page = TestPageBuilder::new().without_live_band().build();
    page.sounds_section.artists[0].performers[0].image_url = None;
    let html = render::sounds(&page.sounds_section).into_string();

    assert!(!html.contains("Live Performance By"));
    assert!(!html.contains("data-drop-target=\"/sounds/0/0\""));
    assert!(html.contains("DJ FARLEY"));
    assert!(html.contains("data-drop-target=\"/sounds/1/0\""));
}

#[test]
fn test_gallery_grid_and_empty_state() {
    let section = GallerySectionData {
        title: "Vibe".to_string(),
        items: sample_items(2),
    };

    let grid = render::gallery(&section, &section.items).into_string();
    assert!(grid.contains("src=\"/gallery/default-0.jpeg\""));
    assert!(grid.contains("alt=\"Default 1\""));
    assert!(grid.find("default-0").unwrap() < grid.find("default-1").unwrap());
    assert!(!grid.contains("Drop images here to build your gallery"));

    let empty = render::gallery(&section, &[]).into_string();
    assert!(empty.contains("Drop images here to build your gallery"));
    assert!(empty.contains("action=\"/gallery/reset\""));
}

#[test]
fn test_cta_states() {
    let data = CtaSectionData {
        title: "Go".to_string(),
        description: "Now".to_string(),
    };

    let idle = render::cta(&data, &NewsletterForm::Idle).into_string();
    assert!(idle.contains(&format!("href=\"{TICKET_URL}\"")));
    assert!(idle.contains("action=\"/newsletter\""));
    assert!(!idle.contains("text-red-400"));

    let invalid = render::cta(&data, &NewsletterForm::Invalid("Bad address".to_string())).into_string();
    assert!(invalid.contains("<form"));
    assert!(invalid.contains("Bad address"));

    let done = render::cta(&data, &NewsletterForm::Submitted).into_string();
    assert!(done.contains("Thank you for subscribing!"));
    assert!(!done.contains("<form"));
}

#[test]
fn test_footer_links() {
    let links = vec![SocialMediaLink {
        platform: "Instagram".to_string(),
        url: "https://www.instagram.com/saboronthebay/".to_string(),
    }];
    let html = render::footer(&links).into_string();
    assert!(html.contains("href=\"https://www.instagram.com/saboronthebay/\""));
    assert!(html.contains(">Instagram<"));

    let bare = render::footer(&[]).into_string();
    assert!(!bare.contains("<nav"));
}
