//! Tests for pagination module

use super::*;
use crate::fetch::FetchController;
use crate::test_util::ScriptedSource;
use pretty_assertions::assert_eq;
use test_case::test_case;

const URL: &str = "/api/templates";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_state_initial() {
    let state = PaginationState::new();
    assert_eq!(state.cursor(), None);
    assert_eq!(state.tokens(), &[String::new()]);
    assert_eq!(state.current_token(), "");
    assert_eq!(state.depth(), 0);
    assert!(!state.has_previous());
    assert_eq!(state, PaginationState::default());
}

#[test]
fn test_state_advance() {
    let state = PaginationState::new().advanced("tok1");
    assert_eq!(state.cursor(), Some(0));
    assert_eq!(state.tokens(), strings(&["", "tok1"]).as_slice());
    assert_eq!(state.current_token(), "tok1");
    assert!(state.has_previous());

    let state = state.advanced("tok2");
    assert_eq!(state.cursor(), Some(1));
    assert_eq!(state.current_token(), "tok2");
    assert_eq!(state.depth(), 2);
}

#[test]
fn test_state_transitions_do_not_alias() {
    let first = PaginationState::new();
    let second = first.advanced("tok1");
    let _third = second.advanced("tok2");

    assert_eq!(first.tokens().len(), 1);
    assert_eq!(second.tokens().len(), 2);
}

#[test]
fn test_state_retreat_on_first_page() {
    assert!(PaginationState::new().retreated().is_none());
}

#[test]
fn test_state_retreat_from_second_page_lands_on_sentinel() {
    let (state, token) = PaginationState::new().advanced("tok1").retreated().unwrap();
    assert_eq!(token, "");
    assert_eq!(state, PaginationState::new());
}

#[test]
fn test_state_retreat_from_third_page() {
    let on_third = PaginationState::new().advanced("tok1").advanced("tok2");
    let (state, token) = on_third.retreated().unwrap();

    assert_eq!(token, "tok1");
    assert_eq!(state.cursor(), Some(0));
    assert_eq!(state.tokens(), strings(&["", "tok1"]).as_slice());
    assert_eq!(state.current_token(), "tok1");
}

#[test_case(1 ; "one page deep")]
#[test_case(2 ; "two pages deep")]
#[test_case(5 ; "five pages deep")]
fn test_state_n_forward_n_back_restores_initial(n: usize) {
    let mut state = PaginationState::new();
    for i in 0..n {
        state = state.advanced(format!("tok{}", i + 1));
        assert_eq!(state.tokens()[0], "");
        assert_eq!(state.tokens().len(), state.cursor().unwrap() + 2);
    }

    for i in (0..n).rev() {
        let (next, token) = state.retreated().unwrap();
        let expected = if i == 0 { String::new() } else { format!("tok{i}") };
        assert_eq!(token, expected);
        assert_eq!(next.tokens()[0], "");
        assert_eq!(next.current_token(), expected);
        state = next;
    }

    assert_eq!(state, PaginationState::new());
    assert!(state.retreated().is_none());
}

// ============================================================================
// Navigator Tests
// ============================================================================

fn three_pages() -> ScriptedSource {
    ScriptedSource::new()
        .page("", &["A", "B"], "tok1")
        .page("tok1", &["C", "D"], "tok2")
        .page("tok2", &["E"], "")
}

fn items<S: crate::listing::ListingSource<Item = String>>(nav: &Navigator<S>) -> Vec<String> {
    nav.controller().snapshot().data.items
}

#[tokio::test]
async fn test_navigator_initial_load() {
    let nav = Navigator::new(FetchController::new(three_pages()), URL);

    assert!(!nav.can_previous());
    assert!(!nav.can_next());

    assert!(nav.load().await.unwrap());
    assert_eq!(items(&nav), strings(&["A", "B"]));
    assert!(nav.can_next());
    assert!(!nav.can_previous());
    assert_eq!(nav.current_request().continuation_token(), "");
}

#[tokio::test]
async fn test_navigator_next_then_previous_scenario() {
    let source = ScriptedSource::new()
        .page("", &["A", "B"], "tok1")
        .page("tok1", &["C", "D"], "");
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    // Next: request with tok1, stack ["", "tok1"], cursor 0
    nav.next().unwrap().await.unwrap();
    assert_eq!(nav.state().tokens(), strings(&["", "tok1"]).as_slice());
    assert_eq!(nav.state().cursor(), Some(0));
    assert_eq!(items(&nav), strings(&["C", "D"]));
    assert!(!nav.can_next());
    assert!(nav.can_previous());

    // Previous: request with "", stack [""], cursor None
    nav.previous().unwrap().await.unwrap();
    assert_eq!(nav.state(), &PaginationState::new());
    assert_eq!(items(&nav), strings(&["A", "B"]));
    assert!(!nav.can_previous());
    assert!(nav.can_next());

    assert_eq!(
        nav.controller().source().tokens(),
        strings(&["", "tok1", ""])
    );
}

#[tokio::test]
async fn test_navigator_disabled_actions_issue_nothing() {
    let source = ScriptedSource::new().page("", &["A"], "");
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    assert!(nav.next().is_none());
    assert!(nav.previous().is_none());
    assert_eq!(nav.state(), &PaginationState::new());
    assert_eq!(nav.controller().source().tokens(), strings(&[""]));
}

#[tokio::test]
async fn test_navigator_walk_forward_and_back() {
    let mut nav = Navigator::new(FetchController::new(three_pages()), URL);
    nav.load().await.unwrap();

    nav.next().unwrap().await.unwrap();
    nav.next().unwrap().await.unwrap();
    assert_eq!(items(&nav), strings(&["E"]));
    assert_eq!(nav.state().cursor(), Some(1));
    assert!(!nav.can_next());

    nav.previous().unwrap().await.unwrap();
    assert_eq!(items(&nav), strings(&["C", "D"]));
    assert_eq!(nav.state().current_token(), "tok1");
    assert!(nav.can_next());

    // Forward again reuses the same token sequence
    nav.next().unwrap().await.unwrap();
    assert_eq!(items(&nav), strings(&["E"]));
    assert_eq!(nav.state().tokens(), strings(&["", "tok1", "tok2"]).as_slice());

    nav.previous().unwrap().await.unwrap();
    nav.previous().unwrap().await.unwrap();
    assert_eq!(nav.state(), &PaginationState::new());
    assert_eq!(items(&nav), strings(&["A", "B"]));

    assert_eq!(
        nav.controller().source().tokens(),
        strings(&["", "tok1", "tok2", "tok1", "tok2", "tok1", ""])
    );
}

#[tokio::test]
async fn test_navigator_refresh_keeps_state() {
    let mut nav = Navigator::new(FetchController::new(three_pages()), URL);
    nav.load().await.unwrap();
    nav.next().unwrap().await.unwrap();

    let before = nav.state().clone();
    nav.refresh().await.unwrap();

    assert_eq!(nav.state(), &before);
    assert_eq!(
        nav.controller().source().tokens().last().map(String::as_str),
        Some("tok1")
    );
}

#[tokio::test]
async fn test_navigator_next_disabled_after_failed_fetch() {
    let source = ScriptedSource::new()
        .page("", &["A"], "tok1")
        .fail("tok1");
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    nav.next().unwrap().await.unwrap();
    let state = nav.controller().snapshot();
    assert!(state.error.is_some());
    assert!(!nav.can_next());
    assert!(nav.can_previous());

    nav.previous().unwrap().await.unwrap();
    assert_eq!(items(&nav), strings(&["A"]));
    assert!(nav.controller().snapshot().error.is_none());
}

#[tokio::test]
async fn test_navigator_next_ignored_while_loading() {
    let source = three_pages();
    let slow = source.gate("tok1");
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    let forward = nav.next().unwrap();
    assert!(!nav.can_next());
    assert!(nav.next().is_none());
    assert_eq!(nav.state().tokens(), strings(&["", "tok1"]).as_slice());

    slow.notify_one();
    assert!(forward.await.unwrap());
    assert_eq!(items(&nav), strings(&["C", "D"]));
    assert!(nav.can_next());

    nav.previous().unwrap().await.unwrap();
    assert_eq!(items(&nav), strings(&["A", "B"]));
    assert_eq!(nav.state(), &PaginationState::new());
    assert_eq!(
        nav.controller().source().tokens(),
        strings(&["", "tok1", ""])
    );
}

#[tokio::test]
async fn test_navigator_rapid_clicks_last_request_wins() {
    let source = three_pages();
    let slow = source.gate("tok1");
    let mut nav = Navigator::new(FetchController::new(source), URL);
    nav.load().await.unwrap();

    // Next is issued, then Previous before the Next response arrives
    let forward = nav.next().unwrap();
    let back = nav.previous().unwrap();

    assert!(back.await.unwrap());
    slow.notify_one();
    assert!(!forward.await.unwrap());

    assert_eq!(items(&nav), strings(&["A", "B"]));
    assert_eq!(nav.state(), &PaginationState::new());
    assert!(nav.can_next());
}
