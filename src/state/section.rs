//! Home section records as served by the backend
//!
//! The backend owns these records. The admin panel only keeps a transient,
//! display-adapted copy whose image paths have been resolved to absolute URLs.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Network scheme prefixes that mark a path as already absolute
const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Kind of homepage content unit
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionType {
    /// Full-width promotional image
    Banner,
    /// Titled tile with an image
    Card,
}

impl SectionType {
    /// Wire value used in multipart forms
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Banner => "BANNER",
            SectionType::Card => "CARD",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single homepage section
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    /// Backend identifier
    pub id: i64,
    /// BANNER or CARD
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Frontend route the section links to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_urls: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl HomeSection {
    /// Rewrite every image path of this section against `base_url`.
    ///
    /// An empty `image_url` is dropped rather than resolved to the bare base.
    pub fn with_resolved_images(mut self, base_url: &str) -> Self {
        self.image_url = self
            .image_url
            .filter(|path| !path.is_empty())
            .map(|path| resolve_image_url(base_url, &path));
        self.image_urls = self
            .image_urls
            .iter()
            .map(|path| resolve_image_url(base_url, path))
            .collect();
        self
    }
}

/// Resolve an image path into a fetchable URL.
///
/// Paths that already start with a network scheme are returned unchanged,
/// anything else is concatenated onto `base_url` as-is.
pub fn resolve_image_url(base_url: &str, path: &str) -> String {
    if SCHEME_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
