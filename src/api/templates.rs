//! Templates endpoint (continuation-token pagination)

use super::types::{Template, TemplateInput};
use crate::delete::HttpDeleter;
use crate::error::Result;
use crate::http::{item_path, HttpClient, RequestConfig};
use crate::listing::{HttpListingSource, ListingRequest, ListingResult, ListingSource, TemplateMeta};
use crate::types::Method;

/// Collection path of templates
pub const TEMPLATES_PATH: &str = "/api/templates";

/// Typed access to `/api/templates`
#[derive(Debug, Clone)]
pub struct TemplatesApi {
    http: HttpClient,
}

impl TemplatesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn template_path(name: &str) -> Result<String> {
        item_path(TEMPLATES_PATH, name)
    }

    /// Listing source for a [`crate::fetch::FetchController`]
    pub fn listing_source(&self) -> HttpListingSource<TemplateMeta> {
        HttpListingSource::new(self.http.clone())
    }

    /// Deleter for a [`crate::delete::DeleteCoordinator`]
    pub fn deleter(&self) -> HttpDeleter {
        HttpDeleter::new(self.http.clone(), TEMPLATES_PATH)
    }

    /// One page of template summaries, resumed from `token`
    pub async fn list(&self, token: &str) -> Result<ListingResult<TemplateMeta>> {
        self.listing_source()
            .fetch(&ListingRequest::new(TEMPLATES_PATH, token))
            .await
    }

    pub async fn get(&self, name: &str) -> Result<Template> {
        self.http.get_json(&Self::template_path(name)?).await
    }

    pub async fn create(&self, input: &TemplateInput) -> Result<Template> {
        self.http
            .request_json(
                Method::POST,
                TEMPLATES_PATH,
                RequestConfig::new().json(serde_json::to_value(input)?),
            )
            .await
    }

    pub async fn update(&self, name: &str, input: &TemplateInput) -> Result<()> {
        self.http
            .request(
                Method::PUT,
                &Self::template_path(name)?,
                RequestConfig::new().json(serde_json::to_value(input)?),
            )
            .await?;
        Ok(())
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        self.http.delete(&Self::template_path(name)?).await
    }
}
