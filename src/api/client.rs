use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::forms::{CreateSection, UpdateSection};
use crate::config::AdminConfig;
use crate::error::{AdminError, Result};
use crate::state::HomeSection;

/// HTTP client for the home sections resource
#[derive(Clone, Debug)]
pub struct SectionsClient {
    client: Client,
    endpoint: String,
}

impl SectionsClient {
    /// Create a new client for the configured backend
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = config.sections_endpoint();
        log::info!("[SectionsClient] Using endpoint {}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Collection URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn section_url(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Fetch every section
    pub async fn list_sections(&self) -> Result<Vec<HomeSection>> {
        self.execute(self.client.get(&self.endpoint)).await
    }

    /// Create a section from a multipart form
    pub async fn create_section(&self, payload: CreateSection) -> Result<HomeSection> {
        log::debug!(
            "Creating {} section '{}' with {}",
            payload.section_type,
            payload.title,
            payload.image.name()
        );
        let form = payload.into_form().await?;
        self.execute(self.client.post(&self.endpoint).multipart(form))
            .await
    }

    /// Send a partial update for one section
    pub async fn update_section(&self, id: i64, payload: UpdateSection) -> Result<HomeSection> {
        log::debug!("Updating section {} fields {:?}", id, payload.field_names());
        let form = payload.into_form().await?;
        self.execute(self.client.put(self.section_url(id)).multipart(form))
            .await
    }

    /// Delete one section
    pub async fn delete_section(&self, id: i64) -> Result<()> {
        log::debug!("Deleting section {}", id);
        self.send(self.client.delete(self.section_url(id))).await?;
        Ok(())
    }

    /// Execute a request and parse its JSON body
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// Execute a request, turning non-success statuses into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(AdminError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
