//! Client-side staging of files before they are submitted
//!
//! Nothing here validates content. Validation happens when a submission
//! is attempted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::media::DataUrl;

/// A user-selected local file
///
/// Only regular files make it into this type, so everything downstream can
/// assume the path pointed at a readable file when it was selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
}

impl SelectedFile {
    /// Accept a path if it points at a regular file
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if !path.is_file() {
            log::warn!("Ignoring selection that is not a file: {}", path.display());
            return None;
        }
        Some(Self::new_unchecked(path))
    }

    /// Convert a raw file dialog result into typed selections
    pub fn from_paths<I>(paths: I) -> Vec<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths.into_iter().filter_map(Self::from_path).collect()
    }

    pub(crate) fn new_unchecked(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Self { path, name }
    }

    /// Full path on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent to the backend
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identity of one staged preview, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StagedId(u64);

/// A staged file with its generated preview
#[derive(Debug, Clone)]
pub struct FilePreview {
    pub id: StagedId,
    pub file: SelectedFile,
    pub preview: DataUrl,
}

/// Staging area for the multi-banner upload form
#[derive(Debug, Default)]
pub struct BannerStaging {
    files: Vec<FilePreview>,
    pub title: String,
    pub description: String,
    generation: u64,
    next_id: u64,
}

impl BannerStaging {
    /// Start a fresh selection.
    ///
    /// Previously staged previews are dropped, and any preview still being
    /// generated for an older selection will be rejected when it arrives.
    pub fn begin_selection(&mut self) -> u64 {
        self.files.clear();
        self.generation += 1;
        self.generation
    }

    /// Append a finished preview in completion order.
    ///
    /// Returns `None` when the preview belongs to a superseded selection.
    pub fn push_preview(
        &mut self,
        generation: u64,
        file: SelectedFile,
        preview: DataUrl,
    ) -> Option<StagedId> {
        if generation != self.generation {
            log::debug!("Discarding stale preview for {}", file.name());
            return None;
        }
        let id = StagedId(self.next_id);
        self.next_id += 1;
        self.files.push(FilePreview { id, file, preview });
        Some(id)
    }

    /// Remove exactly the staged item with this identity
    pub fn remove(&mut self, id: StagedId) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn files(&self) -> &[FilePreview] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Empty the staging list and the shared form fields
    pub fn clear(&mut self) {
        self.files.clear();
        self.title.clear();
        self.description.clear();
    }
}

/// Staging area for the single new-card form
#[derive(Debug, Default)]
pub struct CardStaging {
    pub title: String,
    pub description: String,
    file: Option<SelectedFile>,
    preview: Option<DataUrl>,
}

impl CardStaging {
    /// Stage a file, replacing any earlier one.
    ///
    /// The old preview stays visible until the new one is ready.
    pub fn stage(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Store a preview if it was generated for the currently staged file
    pub fn set_preview(&mut self, file: &SelectedFile, preview: DataUrl) -> bool {
        if self.file.as_ref() != Some(file) {
            return false;
        }
        self.preview = Some(preview);
        true
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&DataUrl> {
        self.preview.as_ref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Replacement images attached to existing rows, keyed by section id
#[derive(Debug, Default)]
pub struct PendingImages {
    by_section: HashMap<i64, SelectedFile>,
}

impl PendingImages {
    pub fn attach(&mut self, section_id: i64, file: SelectedFile) {
        self.by_section.insert(section_id, file);
    }

    pub fn get(&self, section_id: i64) -> Option<&SelectedFile> {
        self.by_section.get(&section_id)
    }

    pub fn clear(&mut self, section_id: i64) {
        self.by_section.remove(&section_id);
    }

    /// Forget images for sections that no longer exist
    pub fn retain_sections(&mut self, ids: &[i64]) {
        self.by_section.retain(|id, _| ids.contains(id));
    }

    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }
}
