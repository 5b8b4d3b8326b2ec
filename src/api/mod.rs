/// Backend access
///
/// This module handles:
/// - The reqwest client for list/create/update/delete (client.rs)
/// - Multipart payload construction (forms.rs)

pub mod client;
pub mod forms;

pub use client::SectionsClient;
pub use forms::{CreateSection, UpdateSection};
