//! Event page for the Sabor On The Bay Dia De Los Muertos cruise.
//!
//! The page is static content composed into HTML, plus two visitor
//! conveniences: a newsletter sign-up kept in persisted storage and
//! drag-and-drop photo replacement for the hero, gallery and lineup.
//!
//! ## Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content model records |
//! | [`page_data`] | Built-in event content |
//! | [`render`] | Section renderers and the root page |
//! | [`storage`] | Persisted key-value store capability |
//! | [`media`] | Dropped file intake and data URLs |
//! | [`gallery`] | Write-through gallery list |
//! | [`hero`] / [`sounds`] | Session-lived photo edits |
//! | [`newsletter`] | Sign-up form state machine |
//! | [`session`] | One visitor's page state |
//! | [`server`] | Local preview server |
//! | [`settings`] | User settings file |

pub mod constants;
pub mod error;
pub mod gallery;
pub mod hero;
pub mod media;
pub mod newsletter;
pub mod page_data;
pub mod render;
pub mod server;
pub mod session;
pub mod settings;
pub mod sounds;
pub mod storage;
pub mod types;
