//! Delete-then-refresh coordination
//!
//! A delete happens out of band: it goes straight to the API, not through
//! the navigator. On success the current page is re-fetched with its own
//! token; the token history is never touched.

use crate::error::{Error, Result};
use crate::http::{item_path, HttpClient};
use crate::listing::ListingSource;
use crate::pagination::Navigator;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Deletes one item of a collection by identifier
#[async_trait]
pub trait Deleter: Send + Sync {
    async fn delete(&self, id: &str) -> Result<()>;
}

/// `DELETE {collection_url}/{id}`
#[derive(Debug, Clone)]
pub struct HttpDeleter {
    http: HttpClient,
    collection_url: String,
}

impl HttpDeleter {
    pub fn new(http: HttpClient, collection_url: impl Into<String>) -> Self {
        Self {
            http,
            collection_url: collection_url.into(),
        }
    }

    /// URL of the item `id`, with `id` percent-encoded as one segment
    pub fn item_url(&self, id: &str) -> Result<String> {
        item_path(&self.collection_url, id)
    }
}

#[async_trait]
impl Deleter for HttpDeleter {
    async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete(&self.item_url(id)?).await
    }
}

/// Confirmation dialog for deleting one item
#[derive(Debug, Clone, Default)]
pub struct ConfirmDelete {
    target: Option<String>,
    busy: bool,
    error: Option<String>,
}

impl ConfirmDelete {
    /// A closed dialog
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for `id`
    pub fn open(&mut self, id: impl Into<String>) {
        self.target = Some(id.into());
        self.busy = false;
        self.error = None;
    }

    /// Close the dialog (cancel, escape, click outside, or done)
    pub fn close(&mut self) {
        self.target = None;
        self.busy = false;
        self.error = None;
    }

    /// Whether the dialog is shown
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Item the dialog asks about
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// A delete is in flight; the confirm button is disabled
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Failure of the last delete attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Heading text, e.g. "Delete template welcome ?"
    pub fn title(&self, noun: &str) -> Option<String> {
        self.target.as_ref().map(|id| format!("Delete {noun} {id} ?"))
    }
}

/// Runs the delete call and the follow-up refresh
#[derive(Debug, Clone)]
pub struct DeleteCoordinator<D> {
    deleter: D,
}

impl<D: Deleter> DeleteCoordinator<D> {
    pub fn new(deleter: D) -> Self {
        Self { deleter }
    }

    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    /// Delete the dialog's target, then refresh the current page.
    ///
    /// On success the refresh is issued before the dialog closes, and its
    /// handle is returned. On failure the listing is left alone and the
    /// dialog stays open with the error. The busy flag is cleared either way.
    pub async fn delete_then_refresh<S: ListingSource>(
        &self,
        dialog: &mut ConfirmDelete,
        navigator: &Navigator<S>,
    ) -> Result<JoinHandle<bool>> {
        let id = dialog
            .target()
            .map(ToString::to_string)
            .ok_or_else(|| Error::navigation("no item selected for deletion"))?;

        dialog.busy = true;
        dialog.error = None;
        let outcome = self.deleter.delete(&id).await;
        dialog.busy = false;

        match outcome {
            Ok(()) => {
                debug!("Deleted {id}, refreshing {}", navigator.resource_url());
                let refresh = navigator.refresh();
                dialog.close();
                Ok(refresh)
            }
            Err(e) => {
                warn!("Failed to delete {id}: {e}");
                dialog.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
