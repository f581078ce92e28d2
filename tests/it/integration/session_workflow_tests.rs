//! Session workflows across reloads.
//!
//! A reload is modelled as a fresh `Session` over the same storage file.

use crate::helpers::{TestPageBuilder, file_session, image_file, memory_session, sample_items, text_file, video_file};
use sabor::constants::{GALLERY_STORAGE_KEY, SUBSCRIBERS_STORAGE_KEY};
use sabor::hero::HeroBackground;
use sabor::newsletter::subscribers;
use sabor::storage::KeyValueStore;
use sabor::types::PageData;
use tempfile::tempdir;

#[test]
fn test_gallery_uploads_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let page = TestPageBuilder::new().with_gallery(sample_items(2)).build();

    let mut first = file_session(page.clone(), &path);
    assert_eq!(first.add_gallery_files(&[image_file("deck.png")]), 1);
    assert!(first.replace_gallery_src(2, &image_file("swap.png")));
    let expected = first.gallery().unwrap().items().to_vec();
    drop(first);

    let second = file_session(page, &path);
    assert_eq!(second.gallery().unwrap().items(), expected.as_slice());
    assert_eq!(expected[0].alt, "deck.png");
    assert_eq!(expected[2].alt, "Default 1");
    assert!(second.render().contains(&expected[0].src));
}

#[test]
fn test_gallery_reset_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let page = TestPageBuilder::new().with_gallery(sample_items(2)).build();

    let mut first = file_session(page.clone(), &path);
    first.add_gallery_files(&[image_file("a.png"), image_file("b.png")]);
    first.reset_gallery();
    assert_eq!(first.store().get(GALLERY_STORAGE_KEY).unwrap(), None);
    drop(first);

    let second = file_session(page, &path);
    assert_eq!(second.gallery().unwrap().items(), sample_items(2).as_slice());
}

#[test]
fn test_newsletter_list_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut first = file_session(PageData::sabor_on_the_bay(), &path);
    first.submit_newsletter("one@example.com");
    drop(first);

    let mut second = file_session(PageData::sabor_on_the_bay(), &path);
    // A fresh form, even though the address list persists
    assert!(!second.newsletter().is_submitted());
    second.submit_newsletter("two@example.com");
    second.submit_newsletter("one@example.com");

    assert_eq!(
        subscribers(second.store()).unwrap(),
        vec!["one@example.com", "two@example.com"]
    );
}

#[test]
fn test_hero_and_lineup_edits_end_with_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut first = file_session(PageData::sabor_on_the_bay(), &path);
    first.drop_hero_file(&video_file("waves.mp4"));
    assert!(first.set_band_image(&image_file("band.png")));
    assert!(first.set_performer_image(0, 0, &image_file("farley.png")));
    assert!(matches!(first.hero(), HeroBackground::Video(_)));
    drop(first);

    let second = file_session(PageData::sabor_on_the_bay(), &path);
    assert!(matches!(second.hero(), HeroBackground::Iframe(_)));
    assert_eq!(second.sounds().data(), &second.content().sounds_section);
}

#[test]
fn test_render_reflects_session_state() {
    let (_store, mut session) = memory_session(TestPageBuilder::new().with_gallery(Vec::new()).build());

    let before = session.render();
    assert!(before.contains("Drop images here to build your gallery"));
    assert!(before.contains("<iframe"));

    let photo = image_file("farley.png");
    session.set_performer_image(0, 0, &photo);
    session.drop_hero_file(&image_file("bg.png"));
    session.add_gallery_files(&[image_file("g.png")]);
    session.submit_newsletter("guest@example.com");

    let after = session.render();
    assert!(after.contains(&photo.to_data_url()));
    assert!(after.contains("background-image: url(data:image/png;base64,"));
    assert!(!after.contains("Drop images here to build your gallery"));
    assert!(after.contains("Thank you for subscribing!"));
}

#[test]
fn test_page_without_gallery_ignores_gallery_events() {
    let (store, mut session) = memory_session(TestPageBuilder::new().without_gallery().build());

    assert!(session.gallery().is_none());
    assert_eq!(session.add_gallery_files(&[image_file("a.png")]), 0);
    assert!(!session.replace_gallery_src(0, &image_file("a.png")));
    session.reset_gallery();

    assert_eq!(store.get(GALLERY_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_opening_session_writes_default_gallery() {
    let (store, session) = memory_session(TestPageBuilder::new().with_gallery(sample_items(3)).build());
    assert_eq!(session.gallery().unwrap().defaults(), sample_items(3).as_slice());
    assert!(store.get(GALLERY_STORAGE_KEY).unwrap().is_some());
    assert_eq!(store.get(SUBSCRIBERS_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_storage_failure_does_not_break_page() {
    let (store, mut session) = memory_session(TestPageBuilder::new().with_gallery(sample_items(1)).build());
    store.set_failing(true);

    assert_eq!(session.add_gallery_files(&[image_file("a.png"), text_file("b.txt")]), 1);
    session.submit_newsletter("guest@example.com");

    let html = session.render();
    assert!(html.contains("alt=\"a.png\""));
    assert!(html.contains("Something went wrong. Please try again."));
}
