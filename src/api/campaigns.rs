//! Campaigns endpoint

use super::types::{Campaign, CampaignInput, CampaignStatus, OffsetPage};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Method, StringMap};

/// Collection path of campaigns
pub const CAMPAIGNS_PATH: &str = "/api/campaign";

/// Typed access to `/api/campaign`
#[derive(Debug, Clone)]
pub struct CampaignsApi {
    http: HttpClient,
}

fn status_name(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Draft => "draft",
        CampaignStatus::Sending => "sending",
        CampaignStatus::Sent => "sent",
        CampaignStatus::Scheduled => "scheduled",
    }
}

fn campaign_form(input: &CampaignInput) -> StringMap {
    StringMap::from([
        ("name".to_string(), input.name.clone()),
        ("subject".to_string(), input.subject.clone()),
        ("from_name".to_string(), input.from_name.clone()),
        ("from_email".to_string(), input.from_email.clone()),
        ("status".to_string(), status_name(input.status).to_string()),
        ("template_id".to_string(), input.template_id.to_string()),
    ])
}

impl CampaignsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn item_path(id: i64) -> String {
        format!("{CAMPAIGNS_PATH}/{id}")
    }

    /// Campaigns on zero-based `page`
    pub async fn all(&self, page: u32) -> Result<OffsetPage<Campaign>> {
        self.http
            .get_json_with_config(
                CAMPAIGNS_PATH,
                RequestConfig::new().query("page", page.to_string()),
            )
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Campaign> {
        self.http.get_json(&Self::item_path(id)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&Self::item_path(id)).await
    }

    pub async fn create(&self, input: &CampaignInput) -> Result<Campaign> {
        self.http
            .request_json(
                Method::POST,
                CAMPAIGNS_PATH,
                RequestConfig::new().form(campaign_form(input)),
            )
            .await
    }
}
