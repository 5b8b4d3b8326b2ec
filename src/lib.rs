//! Home Sections Admin
//!
//! A native admin panel for a website's homepage sections: list banners and
//! cards, upload new ones, edit descriptions and routes, delete entries.
//! All persistence happens in a backend REST service.

pub mod admin;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod state;
pub mod ui;

pub use admin::{Command, Prompter, SectionsAdmin};
pub use error::{AdminError, Result};
