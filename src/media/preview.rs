//! Preview generation for staged uploads
//! Produces a small PNG thumbnail wrapped in a data URL

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::fmt;
use std::io::Cursor;
use std::path::Path;

use crate::error::{AdminError, Result};
use crate::state::SelectedFile;

/// Size of generated previews (square bounding box)
const PREVIEW_SIZE: u32 = 256;

/// An inline `data:` URL
///
/// The decoded bytes are kept alongside the MIME type so the GUI can hand
/// them straight to an image widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    bytes: Bytes,
}

impl DataUrl {
    pub fn new(mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Decoded payload
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Generate a preview for a selected file
///
/// Reading and resizing run on the blocking pool so the UI thread stays free.
pub async fn generate_preview(file: SelectedFile) -> Result<DataUrl> {
    tokio::task::spawn_blocking(move || build_preview(file.path()))
        .await
        .map_err(|e| AdminError::Preview(format!("Task join error: {}", e)))?
}

/// Blocking version of preview generation
pub fn build_preview(path: &Path) -> Result<DataUrl> {
    let data = std::fs::read(path)?;
    Ok(preview_from_bytes(path, data))
}

/// Turn file contents into a preview.
///
/// Anything the `image` crate can decode becomes a PNG thumbnail. Other
/// content is passed through untouched with a MIME type guessed from the
/// file extension.
fn preview_from_bytes(path: &Path, data: Vec<u8>) -> DataUrl {
    match image::load_from_memory(&data) {
        Ok(img) => match encode_thumbnail(&img) {
            Ok(png) => return DataUrl::new("image/png", png),
            Err(e) => log::debug!("Thumbnail encode failed for {}: {}", path.display(), e),
        },
        Err(e) => log::debug!("Not a decodable image {}: {}", path.display(), e),
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    DataUrl::new(mime.essence_str(), data)
}

fn encode_thumbnail(img: &DynamicImage) -> image::ImageResult<Vec<u8>> {
    let thumbnail = img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3);
    // PNG cannot hold float pixels, normalize first
    let thumbnail = DynamicImage::ImageRgba8(thumbnail.to_rgba8());

    let mut out = Cursor::new(Vec::new());
    thumbnail.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
