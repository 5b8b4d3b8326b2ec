/// State management module
///
/// This module holds the data the admin panel works with:
/// - Home section records from the backend (section.rs)
/// - Staged uploads and pending replacement images (staging.rs)

pub mod section;
pub mod staging;

pub use section::{resolve_image_url, HomeSection, SectionType};
pub use staging::{BannerStaging, CardStaging, FilePreview, PendingImages, SelectedFile, StagedId};
