//! Listing request/result values

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Query parameter carrying the continuation token
pub const NEXT_TOKEN_PARAM: &str = "next_token";

/// One page fetch: which collection, resumed from which token.
///
/// An empty token means "from the start".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingRequest {
    resource_url: String,
    continuation_token: String,
}

impl ListingRequest {
    /// Create a request for `resource_url` resuming at `token`
    pub fn new(resource_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            resource_url: resource_url.into(),
            continuation_token: token.into(),
        }
    }

    /// Request for the first page of a collection
    pub fn first_page(resource_url: impl Into<String>) -> Self {
        Self::new(resource_url, "")
    }

    /// Collection URL (path or absolute)
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// Continuation token to resume from
    pub fn continuation_token(&self) -> &str {
        &self.continuation_token
    }

    /// Query pairs for the listing call. The token is always sent, even empty.
    pub fn query(&self) -> [(&'static str, &str); 1] {
        [(NEXT_TOKEN_PARAM, self.continuation_token.as_str())]
    }
}

/// One page of a cursor-paginated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResult<T> {
    /// Items of this page, in server order
    #[serde(rename = "collection", default = "Vec::new")]
    pub items: Vec<T>,
    /// Token for the following page; empty when this is the last page
    #[serde(default)]
    pub next_token: String,
}

impl<T> ListingResult<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_token: impl Into<String>) -> Self {
        Self {
            items,
            next_token: next_token.into(),
        }
    }

    /// The result shown before any response arrived
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_token: String::new(),
        }
    }

    /// Whether the server reported a further page
    pub fn has_next(&self) -> bool {
        !self.next_token.is_empty()
    }

    /// A page with no items. Not an error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListingResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A record that can be shown as a listing row
pub trait ListingItem {
    /// Identifier used for delete and edit routes
    fn identifier(&self) -> &str;
}

/// Template row as returned by `GET /api/templates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub name: String,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}

impl TemplateMeta {
    /// Creation date formatted for display, e.g. "Tue, 01 Oct 2019 10:00:00 GMT"
    pub fn display_date(&self) -> String {
        self.created_at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

impl ListingItem for TemplateMeta {
    fn identifier(&self) -> &str {
        &self.name
    }
}
