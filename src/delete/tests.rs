//! Tests for delete-then-refresh

use super::*;
use crate::error::{Error, Result};
use crate::fetch::FetchController;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::Navigator;
use crate::test_util::ScriptedSource;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const URL: &str = "/api/templates";

/// Deleter that records ids and fails for the ones listed
#[derive(Default)]
struct RecordingDeleter {
    deleted: Mutex<Vec<String>>,
    failing: Vec<String>,
}

impl RecordingDeleter {
    fn failing(ids: &[&str]) -> Self {
        Self {
            deleted: Mutex::new(Vec::new()),
            failing: ids.iter().map(ToString::to_string).collect(),
        }
    }

    fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Deleter for RecordingDeleter {
    async fn delete(&self, id: &str) -> Result<()> {
        if self.failing.iter().any(|f| f == id) {
            return Err(Error::http_status(422, "cannot delete"));
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

fn paged_source() -> ScriptedSource {
    ScriptedSource::new()
        .page("", &["A", "B"], "tok1")
        .page("tok1", &["C", "D"], "tok2")
        .page("tok2", &["E"], "")
}

// ============================================================================
// ConfirmDelete Tests
// ============================================================================

#[test]
fn test_dialog_lifecycle() {
    let mut dialog = ConfirmDelete::new();
    assert!(!dialog.is_open());
    assert_eq!(dialog.title("template"), None);

    dialog.open("welcome");
    assert!(dialog.is_open());
    assert_eq!(dialog.target(), Some("welcome"));
    assert_eq!(
        dialog.title("template").as_deref(),
        Some("Delete template welcome ?")
    );

    dialog.close();
    assert!(!dialog.is_open());
    assert!(!dialog.is_busy());
}

// ============================================================================
// delete_then_refresh Tests
// ============================================================================

#[tokio::test]
async fn test_delete_on_later_page_refreshes_with_same_token() {
    let source = paged_source();
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();
    nav.next().unwrap().await.unwrap();
    nav.next().unwrap().await.unwrap();
    let before = nav.state().clone();

    // Server now returns a shorter third page
    nav.controller().source().set_page("tok2", &[], "");

    let coordinator = DeleteCoordinator::new(RecordingDeleter::default());
    let mut dialog = ConfirmDelete::new();
    dialog.open("E");

    let refresh = coordinator
        .delete_then_refresh(&mut dialog, &nav)
        .await
        .unwrap();
    assert!(refresh.await.unwrap());

    assert_eq!(coordinator.deleter().deleted(), vec!["E".to_string()]);
    assert_eq!(nav.state(), &before);
    assert_eq!(nav.state().cursor(), Some(1));
    assert_eq!(
        nav.controller().source().tokens().last().map(String::as_str),
        Some("tok2")
    );
    assert!(nav.controller().snapshot().data.is_empty());
    assert!(!dialog.is_open());
    assert!(!dialog.is_busy());
}

#[tokio::test]
async fn test_delete_on_first_page_refreshes_first_page() {
    let source = paged_source();
    let nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    let coordinator = DeleteCoordinator::new(RecordingDeleter::default());
    let mut dialog = ConfirmDelete::new();
    dialog.open("A");

    coordinator
        .delete_then_refresh(&mut dialog, &nav)
        .await
        .unwrap()
        .await
        .unwrap();

    assert_eq!(
        nav.controller().source().tokens(),
        vec![String::new(), String::new()]
    );
}

#[tokio::test]
async fn test_delete_failure_leaves_listing_alone() {
    let source = paged_source();
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();
    nav.next().unwrap().await.unwrap();
    let before = nav.state().clone();
    let requests_before = nav.controller().source().requests().len();

    let coordinator = DeleteCoordinator::new(RecordingDeleter::failing(&["C"]));
    let mut dialog = ConfirmDelete::new();
    dialog.open("C");

    let err = coordinator
        .delete_then_refresh(&mut dialog, &nav)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(nav.state(), &before);
    assert_eq!(nav.controller().source().requests().len(), requests_before);
    assert!(dialog.is_open());
    assert!(!dialog.is_busy());
    assert!(dialog.error().unwrap().contains("422"));
}

#[tokio::test]
async fn test_busy_cleared_on_both_paths() {
    let nav = Navigator::new(FetchController::new(paged_source()), URL);
    nav.load().await.unwrap();
    let coordinator = DeleteCoordinator::new(RecordingDeleter::failing(&["bad"]));

    for id in ["bad", "good"] {
        let mut dialog = ConfirmDelete::new();
        dialog.open(id);
        let _ = coordinator.delete_then_refresh(&mut dialog, &nav).await;
        assert!(!dialog.is_busy(), "busy left set after deleting {id}");
    }
}

#[tokio::test]
async fn test_retry_after_failure_clears_error() {
    let nav = Navigator::new(FetchController::new(paged_source()), URL);
    nav.load().await.unwrap();

    let failing = DeleteCoordinator::new(RecordingDeleter::failing(&["A"]));
    let mut dialog = ConfirmDelete::new();
    dialog.open("A");
    assert!(failing.delete_then_refresh(&mut dialog, &nav).await.is_err());
    assert!(dialog.error().is_some());

    let working = DeleteCoordinator::new(RecordingDeleter::default());
    working
        .delete_then_refresh(&mut dialog, &nav)
        .await
        .unwrap()
        .await
        .unwrap();
    assert!(!dialog.is_open());
    assert!(dialog.error().is_none());
}

#[tokio::test]
async fn test_delete_without_target() {
    let nav = Navigator::new(FetchController::new(paged_source()), URL);
    let coordinator = DeleteCoordinator::new(RecordingDeleter::default());
    let mut dialog = ConfirmDelete::new();

    let err = coordinator
        .delete_then_refresh(&mut dialog, &nav)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Navigation { .. }));
    assert!(coordinator.deleter().deleted().is_empty());
}

// ============================================================================
// HttpDeleter Tests
// ============================================================================

#[tokio::test]
async fn test_http_deleter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/templates/welcome"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http =
        HttpClient::with_config(HttpClientConfig::builder().base_url(mock_server.uri()).build())
            .unwrap();
    let deleter = HttpDeleter::new(http, "/api/templates/");

    assert_eq!(deleter.item_url("welcome").unwrap(), "/api/templates/welcome");
    assert_eq!(
        deleter.item_url("a/b").unwrap(),
        "/api/templates/a%2Fb"
    );
    deleter.delete("welcome").await.unwrap();
}
