//! Multipart payloads sent to the backend

use reqwest::multipart::{Form, Part};

use crate::error::Result;
use crate::state::{SectionType, SelectedFile};

/// Payload for creating a section
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSection {
    pub section_type: SectionType,
    pub title: String,
    /// Omitted from the form when `None`
    pub description: Option<String>,
    pub image: SelectedFile,
}

impl CreateSection {
    /// Build the multipart form, reading the image from disk
    pub async fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("type", self.section_type.as_str())
            .text("title", self.title);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        Ok(form.part("image", file_part(&self.image).await?))
    }
}

/// Partial payload for updating a section
///
/// Only fields that are `Some` are sent. An empty payload is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSection {
    pub description: Option<String>,
    pub file: Option<SelectedFile>,
    pub route: Option<String>,
}

impl UpdateSection {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.file.is_none() && self.route.is_none()
    }

    /// Names of the fields this payload will carry
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.description.is_some() {
            names.push("description");
        }
        if self.file.is_some() {
            names.push("file");
        }
        if self.route.is_some() {
            names.push("route");
        }
        names
    }

    /// Build the multipart form, reading the replacement image if present
    pub async fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        if let Some(file) = &self.file {
            form = form.part("file", file_part(file).await?);
        }
        if let Some(route) = self.route {
            form = form.text("route", route);
        }
        Ok(form)
    }
}

async fn file_part(file: &SelectedFile) -> Result<Part> {
    let data = tokio::fs::read(file.path()).await?;
    let mime = mime_guess::from_path(file.path()).first_or_octet_stream();
    let part = Part::bytes(data)
        .file_name(file.name().to_string())
        .mime_str(mime.essence_str())?;
    Ok(part)
}
