//! Shared fixtures for unit tests

use crate::error::{Error, Result};
use crate::listing::{ListingRequest, ListingResult, ListingSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory listing source keyed by continuation token
#[derive(Default)]
pub(crate) struct ScriptedSource {
    pages: Mutex<HashMap<String, ListingResult<String>>>,
    failing: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    requests: Mutex<Vec<ListingRequest>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `items`/`next` for requests carrying `token`
    pub(crate) fn page(self, token: &str, items: &[&str], next: &str) -> Self {
        self.set_page(token, items, next);
        self
    }

    /// Replace the page served for `token`
    pub(crate) fn set_page(&self, token: &str, items: &[&str], next: &str) {
        let items = items.iter().map(ToString::to_string).collect();
        self.pages
            .lock()
            .unwrap()
            .insert(token.to_string(), ListingResult::new(items, next));
    }

    /// Answer requests for `token` with a 500
    pub(crate) fn fail(self, token: &str) -> Self {
        self.failing.lock().unwrap().push(token.to_string());
        self
    }

    /// Hold responses for `token` until the returned notify fires
    pub(crate) fn gate(&self, token: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(token.to_string(), Arc::clone(&notify));
        notify
    }

    /// Every request received, in order
    pub(crate) fn requests(&self) -> Vec<ListingRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Tokens of every request received, in order
    pub(crate) fn tokens(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.continuation_token().to_string())
            .collect()
    }
}

#[async_trait]
impl ListingSource for ScriptedSource {
    type Item = String;

    async fn fetch(&self, request: &ListingRequest) -> Result<ListingResult<String>> {
        let token = request.continuation_token().to_string();
        self.requests.lock().unwrap().push(request.clone());

        let gate = self.gates.lock().unwrap().get(&token).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.lock().unwrap().contains(&token) {
            return Err(Error::http_status(500, "scripted failure"));
        }

        self.pages
            .lock()
            .unwrap()
            .get(&token)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no page for token {token:?}")))
    }
}
