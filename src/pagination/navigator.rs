//! Pagination navigator
//!
//! Drives a [`FetchController`] through a cursor-paginated collection and
//! keeps the token history needed to step back.

use super::state::PaginationState;
use crate::fetch::FetchController;
use crate::listing::{ListingRequest, ListingSource};
use tokio::task::JoinHandle;
use tracing::debug;

/// Next/Previous navigation over one collection
pub struct Navigator<S: ListingSource> {
    resource_url: String,
    controller: FetchController<S>,
    state: PaginationState,
}

impl<S: ListingSource> Navigator<S> {
    /// Create a navigator for `resource_url`, positioned on the first page
    pub fn new(controller: FetchController<S>, resource_url: impl Into<String>) -> Self {
        Self {
            resource_url: resource_url.into(),
            controller,
            state: PaginationState::new(),
        }
    }

    /// Collection URL requests are issued against
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// The fetch controller backing this navigator
    pub fn controller(&self) -> &FetchController<S> {
        &self.controller
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Request for the page currently shown
    pub fn current_request(&self) -> ListingRequest {
        ListingRequest::new(&self.resource_url, self.state.current_token())
    }

    /// Next is available once the shown page has settled and reports a successor.
    ///
    /// While a request is outstanding the last successor token belongs to the
    /// page being replaced, so following it would push the same token twice.
    pub fn can_next(&self) -> bool {
        !self.controller.snapshot().is_loading && !self.controller.next_token().is_empty()
    }

    /// Previous is available once at least one Next happened
    pub fn can_previous(&self) -> bool {
        self.state.has_previous()
    }

    /// Fetch the page for the current token (initial load)
    pub fn load(&self) -> JoinHandle<bool> {
        self.controller.invoke(self.current_request())
    }

    /// Re-fetch the current page without touching the token history
    pub fn refresh(&self) -> JoinHandle<bool> {
        debug!(
            "Refreshing {} at token {:?}",
            self.resource_url,
            self.state.current_token()
        );
        self.controller.invoke(self.current_request())
    }

    /// Move to the following page. Returns `None` when Next is disabled,
    /// including while the current page is still loading.
    pub fn next(&mut self) -> Option<JoinHandle<bool>> {
        if !self.can_next() {
            return None;
        }
        let token = self.controller.next_token();

        let handle = self
            .controller
            .invoke(ListingRequest::new(&self.resource_url, token.clone()));
        self.state = self.state.advanced(token);
        debug!("Next: cursor now {:?}", self.state.cursor());
        Some(handle)
    }

    /// Move to the preceding page. Returns `None` when Previous is disabled.
    pub fn previous(&mut self) -> Option<JoinHandle<bool>> {
        let (state, token) = self.state.retreated()?;

        let handle = self
            .controller
            .invoke(ListingRequest::new(&self.resource_url, token));
        self.state = state;
        debug!("Previous: cursor now {:?}", self.state.cursor());
        Some(handle)
    }
}

impl<S: ListingSource> std::fmt::Debug for Navigator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("resource_url", &self.resource_url)
            .field("state", &self.state)
            .field("controller", &self.controller)
            .finish()
    }
}
