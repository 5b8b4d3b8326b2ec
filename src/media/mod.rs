/// Local media handling
///
/// This module handles:
/// - Reading staged files from disk
/// - Generating thumbnail previews as data URLs

pub mod preview;

pub use preview::{generate_preview, DataUrl};
