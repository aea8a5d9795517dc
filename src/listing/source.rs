//! Listing sources
//!
//! A `ListingSource` performs one page fetch. The fetch controller only ever
//! talks to this trait, so tests and alternative transports plug in here.

use super::types::{ListingRequest, ListingResult};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Performs a single listing request
#[async_trait]
pub trait ListingSource: Send + Sync + 'static {
    /// Item type of the collection
    type Item: Clone + Send + Sync + 'static;

    /// Fetch one page
    async fn fetch(&self, request: &ListingRequest) -> Result<ListingResult<Self::Item>>;
}

#[async_trait]
impl<S: ListingSource> ListingSource for Arc<S> {
    type Item = S::Item;

    async fn fetch(&self, request: &ListingRequest) -> Result<ListingResult<S::Item>> {
        (**self).fetch(request).await
    }
}

/// `GET {resource_url}?next_token={token}` against the API server
pub struct HttpListingSource<T> {
    http: HttpClient,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpListingSource<T> {
    /// Create a source using `http`
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _item: PhantomData,
        }
    }
}

impl<T> Clone for HttpListingSource<T> {
    fn clone(&self) -> Self {
        Self::new(self.http.clone())
    }
}

impl<T> std::fmt::Debug for HttpListingSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpListingSource")
            .field("http", &self.http)
            .finish()
    }
}

#[async_trait]
impl<T> ListingSource for HttpListingSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Item = T;

    async fn fetch(&self, request: &ListingRequest) -> Result<ListingResult<T>> {
        let [(key, token)] = request.query();
        debug!(
            "Fetching listing {} (token: {:?})",
            request.resource_url(),
            token
        );

        self.http
            .get_json_with_config(request.resource_url(), RequestConfig::new().query(key, token))
            .await
    }
}
