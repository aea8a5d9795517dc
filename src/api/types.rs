//! Entity and pagination types for the REST wrappers

use crate::config::MAX_PER_PAGE;
use crate::types::{StringMap, Timestamp};
use serde::{Deserialize, Serialize};

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset pagination parameters for lists, subscribers and campaigns.
///
/// Not interchangeable with the continuation-token model used by templates.
/// Pages are zero-based; `per_page` is capped at 100 like the server does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub paginate: bool,
    pub per_page: u32,
    pub page: u32,
}

impl PageParams {
    /// Paginated request for `page` with `per_page` items
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            paginate: true,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            page,
        }
    }

    /// Ask for the whole collection in one response
    pub fn unpaginated() -> Self {
        Self {
            paginate: false,
            per_page: MAX_PER_PAGE,
            page: 0,
        }
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }

    /// Parameters for the following page
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..*self
        }
    }

    /// Query pairs as sent on the wire
    pub fn query(&self) -> Vec<(String, String)> {
        vec![
            ("paginate".to_string(), self.paginate.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(0, crate::config::DEFAULT_PER_PAGE)
    }
}

/// One page of an offset-paginated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    /// Total number of items, when the server reports it
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
}

impl<T> OffsetPage<T> {
    /// Whether a page after this one can exist
    pub fn has_more(&self) -> bool {
        match self.total {
            Some(total) => {
                let seen = (u64::from(self.page) + 1) * u64::from(self.per_page);
                seen < total
            }
            None => {
                !self.collection.is_empty()
                    && self.collection.len() as u64 >= u64::from(self.per_page)
            }
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Full template as returned by `GET /api/templates/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub html_part: String,
    #[serde(default)]
    pub text_part: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Body for creating or updating a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInput {
    pub name: String,
    pub html_part: String,
    pub text_part: String,
    pub subject: String,
}

// ============================================================================
// Lists & Subscribers
// ============================================================================

/// Mailing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Body for creating or updating a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInput {
    pub name: String,
}

/// Subscriber of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub metadata: Option<StringMap>,
    #[serde(default)]
    pub blacklisted: bool,
    #[serde(default)]
    pub active: bool,
}

/// Result of a subscriber CSV import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Campaigns
// ============================================================================

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Sending,
    Sent,
    Scheduled,
}

/// Campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub scheduled_at: Option<Timestamp>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

/// Body for creating a campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub subject: String,
    pub from_name: String,
    pub from_email: String,
    pub status: CampaignStatus,
    pub template_id: i64,
}
