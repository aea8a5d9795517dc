//! Data fetch controller
//!
//! Holds the tri-state result of the most recent listing request and
//! publishes it through a `tokio::sync::watch` channel. Every issued request
//! gets a sequence number; a completion only lands if its number is still
//! the latest one issued, so a slow response to a superseded request can
//! never overwrite a newer page.

use crate::error::{Error, Result};
use crate::listing::{ListingRequest, ListingResult, ListingSource};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Observable state of the listing fetch
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    /// A request is outstanding
    pub is_loading: bool,
    /// Last applied page, or the empty result before the first response and after a failure
    pub data: ListingResult<T>,
    /// Failure of the last applied request
    pub error: Option<Arc<Error>>,
    /// Sequence number of the latest issued request (0 before any)
    pub seq: u64,
    /// The latest issued request
    pub request: Option<ListingRequest>,
}

impl<T> FetchState<T> {
    /// State on mount: loading, no data yet
    pub fn initial() -> Self {
        Self {
            is_loading: true,
            data: ListingResult::empty(),
            error: None,
            seq: 0,
            request: None,
        }
    }

    /// Settled with a page and no error
    pub fn is_success(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::initial()
    }
}

/// Receipt for an issued request, redeemed by [`FetchController::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    request: ListingRequest,
}

impl Ticket {
    /// Sequence number assigned at issue time
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The request this ticket was issued for
    pub fn request(&self) -> &ListingRequest {
        &self.request
    }
}

struct Inner<S: ListingSource> {
    source: S,
    state: watch::Sender<FetchState<S::Item>>,
}

/// Issues listing requests and owns their result state.
///
/// Cloning is cheap; clones share the same state.
pub struct FetchController<S: ListingSource> {
    inner: Arc<Inner<S>>,
}

impl<S: ListingSource> Clone for FetchController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ListingSource> FetchController<S> {
    /// Create a controller over `source`, starting in the loading state
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(FetchState::initial());
        Self {
            inner: Arc::new(Inner { source, state }),
        }
    }

    /// The listing source
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<FetchState<S::Item>> {
        self.inner.state.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> FetchState<S::Item> {
        self.inner.state.borrow().clone()
    }

    /// Continuation token of the currently shown page's successor
    pub fn next_token(&self) -> String {
        self.inner.state.borrow().data.next_token.clone()
    }

    /// Mark `request` as the latest and enter the loading state.
    ///
    /// Any ticket issued before this one becomes stale.
    pub fn begin(&self, request: ListingRequest) -> Ticket {
        let mut seq = 0;
        self.inner.state.send_modify(|state| {
            state.seq += 1;
            seq = state.seq;
            state.is_loading = true;
            state.error = None;
            state.request = Some(request.clone());
        });
        debug!(
            "Issued listing request #{} for {} (token: {:?})",
            seq,
            request.resource_url(),
            request.continuation_token()
        );
        Ticket { seq, request }
    }

    /// Apply the outcome of `ticket`'s request.
    ///
    /// Returns `false` and leaves the state untouched when a newer request
    /// has been issued since.
    pub fn complete(&self, ticket: &Ticket, outcome: Result<ListingResult<S::Item>>) -> bool {
        let applied = self.inner.state.send_if_modified(|state| {
            if state.seq != ticket.seq {
                return false;
            }
            state.is_loading = false;
            match outcome {
                Ok(page) => {
                    state.data = page;
                    state.error = None;
                }
                Err(e) => {
                    warn!("Listing request #{} failed: {}", ticket.seq, e);
                    state.data = ListingResult::empty();
                    state.error = Some(Arc::new(e));
                }
            }
            true
        });

        if !applied {
            debug!("Discarding stale response for listing request #{}", ticket.seq);
        }
        applied
    }

    /// Issue `request` and apply its outcome in place.
    ///
    /// Returns whether the outcome was applied (it is not when superseded).
    pub async fn fetch(&self, request: ListingRequest) -> bool {
        let ticket = self.begin(request);
        let outcome = self.inner.source.fetch(&ticket.request).await;
        self.complete(&ticket, outcome)
    }

    /// Issue `request` on a background task.
    ///
    /// The state enters loading before this returns. The handle resolves to
    /// whether the outcome was applied.
    pub fn invoke(&self, request: ListingRequest) -> JoinHandle<bool> {
        let ticket = self.begin(request);
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.inner.source.fetch(&ticket.request).await;
            this.complete(&ticket, outcome)
        })
    }

    /// Wait until no request is outstanding and return the settled state.
    ///
    /// Fails with [`Error::FetchTask`] when no request was ever issued, since
    /// the initial loading state would never settle.
    pub async fn settled(&self) -> Result<FetchState<S::Item>> {
        let mut rx = self.subscribe();
        if rx.borrow().seq == 0 {
            return Err(Error::FetchTask {
                message: "no listing request has been issued".to_string(),
            });
        }
        let state = rx
            .wait_for(|state| !state.is_loading)
            .await
            .map_err(|e| Error::FetchTask {
                message: e.to_string(),
            })?;
        Ok(state.clone())
    }
}

impl<S: ListingSource> std::fmt::Debug for FetchController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("FetchController")
            .field("seq", &state.seq)
            .field("is_loading", &state.is_loading)
            .field("has_error", &state.error.is_some())
            .finish_non_exhaustive()
    }
}
