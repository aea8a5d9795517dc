//! REST API wrappers
//!
//! One typed client per resource. Templates use continuation tokens;
//! lists, subscribers and campaigns use offset pagination
//! ([`PageParams`]). The two models are deliberately separate types.

mod campaigns;
mod lists;
mod templates;
mod types;

pub use campaigns::{CampaignsApi, CAMPAIGNS_PATH};
pub use lists::{ListsApi, LISTS_PATH};
pub use templates::{TemplatesApi, TEMPLATES_PATH};
pub use types::{
    Campaign, CampaignInput, CampaignStatus, ImportResult, List, ListInput, OffsetPage,
    PageParams, Subscriber, Template, TemplateInput,
};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;

/// Entry point bundling every resource client against one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client from `config`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn templates(&self) -> TemplatesApi {
        TemplatesApi::new(self.http.clone())
    }

    pub fn lists(&self) -> ListsApi {
        ListsApi::new(self.http.clone())
    }

    pub fn campaigns(&self) -> CampaignsApi {
        CampaignsApi::new(self.http.clone())
    }

    /// Offset parameters for `page` using the configured page size
    pub fn page(&self, page: u32) -> PageParams {
        PageParams::new(page, self.config.per_page)
    }
}
