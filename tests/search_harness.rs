#![allow(unused)]
//! Search pipeline integration harness.
//!
//! # What this covers
//!
//! The full path a keystroke takes — session, debounce gate, fetcher, HTTP
//! source — against a real HTTP server on localhost:
//!
//! - **Reference scenarios**: "al" finds Alice, "zz" finds nothing, typing
//!   then clearing inside the window never touches the network.
//! - **Debounce**: a burst of keystrokes produces exactly one request.
//! - **Filtering**: case-insensitive substring on `name`, never `email`;
//!   extra JSON fields are ignored; source order is kept.
//! - **Failures**: error status, malformed body and refused connection all
//!   leave the results alone, lower the loading flag and land in
//!   `last_error`.
//! - **Stale responses**: a slow earlier response overwrites a newer one
//!   under `apply`, and is dropped under `discard`.
//!
//! # What this does NOT cover
//!
//! - Terminal rendering (see the unit tests in `rts-tui`)
//! - Debounce timing edge cases on a paused clock (see `rts-core`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rts::{FetchError, SearchSession, SearchView, StalePolicy};
use std::time::Duration;
use tokio::time::{sleep, timeout};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Type `term` and wait for the next fetch completion.
async fn search(session: &mut SearchSession, term: &str) -> SearchView {
    let mut rx = session.subscribe();
    let before = rx.borrow_and_update().completed;
    session.input(term);
    let view = timeout(WAIT, rx.wait_for(|v| v.completed > before))
        .await
        .expect("search timed out")
        .expect("session closed")
        .clone();
    view
}

async fn wait_for_hits(api: &FakeUserApi, n: usize) {
    timeout(WAIT, async {
        while api.hits().await < n {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("request never reached the server");
}

fn session_for(api: &FakeUserApi) -> SearchSession {
    SearchSession::from_config(&search_config(&api.url(), 50))
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn typing_al_returns_alice() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    let view = search(&mut session, "al").await;

    assert_eq!(view.results, vec![alice()]);
    assert!(!view.loading);
    assert_eq!(view.last_error, None);
    assert_eq!(api.hits().await, 1);
}

#[tokio::test]
async fn typing_zz_shows_no_results() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    let view = search(&mut session, "zz").await;

    assert!(view.results.is_empty());
    assert!(session.shows_no_results());
}

#[tokio::test]
async fn clearing_inside_window_never_fetches() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    session.input("a");
    session.input("");
    sleep(Duration::from_millis(300)).await;

    assert_eq!(api.hits().await, 0);
    assert!(session.view().results.is_empty());
    assert!(!session.shows_no_results());
}

#[tokio::test]
async fn burst_of_keystrokes_makes_one_request() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    for q in ["b", "bo"] {
        session.input(q);
    }
    let view = search(&mut session, "bob").await;
    sleep(Duration::from_millis(200)).await;

    assert_eq!(view.results, vec![bob()]);
    assert_eq!(api.hits().await, 1);
}

#[tokio::test]
async fn same_query_twice_gives_same_results() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    let first = search(&mut session, "B").await;
    let second = search(&mut session, "B").await;

    assert_eq!(first.results, second.results);
    assert_eq!(api.hits().await, 2);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn email_is_never_searched() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    let view = search(&mut session, "x.com").await;
    assert!(view.results.is_empty());
}

#[tokio::test]
async fn placeholder_payload_filters_in_source_order() {
    let api = FakeUserApi::start(placeholder_users()).await.unwrap();
    let mut session = session_for(&api);

    let view = search(&mut session, "CLEM").await;

    let names: Vec<&str> = view.results.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Clementine Bauch", "Clementina DuBuque"]);
    assert_eq!(view.results[0].email, "Nathan@yesenia.net");
}

#[tokio::test]
async fn collection_changes_are_picked_up_on_next_search() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);

    assert_eq!(search(&mut session, "al").await.results, vec![alice()]);
    api.set_users(placeholder_users()).await;
    let view = search(&mut session, "al").await;
    // No placeholder name contains "al".
    assert!(view.results.is_empty());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_keeps_stale_results() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let mut session = session_for(&api);
    search(&mut session, "al").await;

    api.fail_with(StatusCode::INTERNAL_SERVER_ERROR).await;
    let view = search(&mut session, "bob").await;

    assert_eq!(view.results, vec![alice()]);
    assert!(!view.loading);
    assert_eq!(view.last_error, Some(FetchError::Status(500)));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    api.serve_raw("{not json").await;
    let mut session = session_for(&api);

    let view = search(&mut session, "al").await;

    assert!(view.results.is_empty());
    assert!(matches!(view.last_error, Some(FetchError::Decode(_))));
}

#[tokio::test]
async fn object_instead_of_array_is_a_decode_error() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    api.serve_raw(r#"{"users": []}"#).await;
    let mut session = session_for(&api);

    let view = search(&mut session, "al").await;
    assert!(matches!(view.last_error, Some(FetchError::Decode(_))));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let endpoint = dead_endpoint().await;
    let mut session = SearchSession::from_config(&search_config(&endpoint, 20));

    let view = search(&mut session, "al").await;

    assert!(!view.loading);
    assert!(matches!(view.last_error, Some(FetchError::Transport(_))));
}

#[tokio::test]
async fn loading_flag_spans_slow_response() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    api.set_delay(Duration::from_millis(300)).await;
    let mut session = session_for(&api);
    let mut rx = session.subscribe();

    session.input("al");
    timeout(WAIT, rx.wait_for(|v| v.loading))
        .await
        .expect("loading never raised")
        .unwrap();
    assert!(session.view().results.is_empty());

    let view = timeout(WAIT, rx.wait_for(|v| v.completed == 1))
        .await
        .expect("fetch never completed")
        .unwrap()
        .clone();
    assert!(!view.loading);
    assert_eq!(view.results, vec![alice()]);
}

// ---------------------------------------------------------------------------
// Stale responses
// ---------------------------------------------------------------------------

/// Issue a slow "al" request, then a fast "bo" request, and return the
/// session once "bo" has landed.
async fn race(api: &FakeUserApi, policy: StalePolicy) -> SearchSession {
    let mut cfg = search_config(&api.url(), 20);
    cfg.stale_responses = policy;
    let mut session = SearchSession::from_config(&cfg);
    let mut rx = session.subscribe();

    api.set_delay(Duration::from_millis(500)).await;
    session.input("al");
    wait_for_hits(api, 1).await;

    api.set_delay(Duration::ZERO).await;
    session.input("bo");
    timeout(WAIT, rx.wait_for(|v| v.results == vec![bob()]))
        .await
        .expect("fast response never landed")
        .unwrap();
    session
}

#[tokio::test]
async fn apply_policy_lets_slow_stale_response_win() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let session = race(&api, StalePolicy::Apply).await;
    let mut rx = session.subscribe();

    let view = timeout(WAIT, rx.wait_for(|v| v.completed == 2))
        .await
        .expect("slow response never landed")
        .unwrap()
        .clone();
    assert_eq!(session.query(), "bo");
    assert_eq!(view.results, vec![alice()]);
}

#[tokio::test]
async fn discard_policy_drops_slow_stale_response() {
    let api = FakeUserApi::start(alice_bob()).await.unwrap();
    let session = race(&api, StalePolicy::Discard).await;

    sleep(Duration::from_millis(700)).await;
    let view = session.view();
    assert_eq!(view.results, vec![bob()]);
    assert_eq!(view.completed, 1);
    assert!(!view.loading);
}
