// Integration tests for pl-explorer: the debounce → query → fetch-result →
// pagination-window flow, driven through the public library API.

use std::time::{Duration, Instant};

use pl_explorer::api::{PaginationInfo, PlayersResponse};
use pl_explorer::app::{AppState, FetchMessage};
use pl_explorer::debounce::{DEBOUNCE_DELAY, Debouncer};
use pl_explorer::error::ApiError;
use pl_explorer::pagination::{PageMarker, compute_window};

fn response_for(search: &str, page: u32, total: u64) -> PlayersResponse {
    let limit = 20u32;
    let total_pages = (total.div_ceil(u64::from(limit)) as u32).max(1);
    let players = (0..1)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "name": format!("{search}-{page}-{i}"),
                "full_name": null,
                "date_of_birth": null,
                "place_of_birth": null,
                "height": null,
                "position": null,
                "nationality": null,
                "wikipedia_url": format!("https://en.wikipedia.org/wiki/{search}_{page}_{i}"),
            }))
            .unwrap()
        })
        .collect();
    PlayersResponse {
        players,
        pagination: PaginationInfo {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}

// 1) Typing a burst, waiting out the quiet period, and applying the fetch
//    result: one commit, one fetch, page reset to 1.
#[test]
fn debounced_search_flow_commits_once_and_resets_page() {
    let mut app = AppState::new(20);
    let t0 = Instant::now();

    // Seed: user is on page 3 of the unfiltered listing.
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 3, 137)),
    });
    app.query.page = 3;

    // Rapid keystrokes, all within the debounce window.
    for (i, text) in ["s", "sa", "sak", "saka"].iter().enumerate() {
        app.search_input = text.to_string();
        app.debouncer
            .submit(*text, t0 + Duration::from_millis(50 * i as u64));
    }
    assert_eq!(app.debouncer.poll(t0 + Duration::from_millis(200)), None);

    let committed = app
        .debouncer
        .poll(t0 + Duration::from_millis(150) + DEBOUNCE_DELAY)
        .expect("quiet period elapsed");
    assert_eq!(committed, "saka");
    assert!(app.commit_search(committed));
    assert_eq!(app.query.page, 1, "a new search always starts at page 1");

    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("saka", 1, 4)),
    });
    assert_eq!(app.players[0].name, "saka-1-0");
    assert!(compute_window(1, app.effective_pagination().total_pages).is_empty());
}

// 2) Clearing bypasses the debounce entirely.
#[test]
fn clearing_search_commits_immediately() {
    let mut app = AppState::new(20);
    app.commit_search("salah".to_string());
    app.search_input = "salah".to_string();
    app.debouncer.submit("salah2", Instant::now());

    // Clear action: wipe the input, drop the pending commit, commit "" now.
    app.search_input.clear();
    app.debouncer.cancel();
    assert!(app.commit_search(String::new()));
    assert_eq!(app.query.search, "");
    assert_eq!(app.query.page, 1);
    assert!(!app.debouncer.is_pending());
}

// 3) Two overlapping requests: the UI must end up showing the second
//    request's result regardless of completion order.
#[test]
fn overlapping_fetches_resolve_to_the_newest_request() {
    let mut app = AppState::new(20);

    app.commit_search("a".to_string());
    let first = app.begin_fetch();

    app.commit_search("ab".to_string());
    let second = app.begin_fetch();

    // Completion order A: stale first, then fresh second.
    app.apply(FetchMessage::Players {
        generation: first,
        result: Ok(response_for("a", 1, 10)),
    });
    app.apply(FetchMessage::Players {
        generation: second,
        result: Ok(response_for("ab", 1, 5)),
    });
    assert_eq!(app.players[0].name, "ab-1-0");

    // Completion order B: fresh second first, then the stale first — which
    // must not overwrite newer state.
    let third = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation: third,
        result: Ok(response_for("abc", 1, 2)),
    });
    app.apply(FetchMessage::Players {
        generation: second,
        result: Ok(response_for("ab", 1, 5)),
    });
    assert_eq!(app.players[0].name, "abc-1-0");
}

// 4) 137 players at 20 per page: exactly seven pages, no ellipsis.
#[test]
fn hundred_thirty_seven_players_paginate_into_seven_pages() {
    let mut app = AppState::new(20);
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 1, 137)),
    });

    let p = app.effective_pagination();
    assert_eq!(p.total_pages, 7);
    assert!(p.has_next);
    assert!(!p.has_prev);
    assert_eq!(
        compute_window(p.page, p.total_pages),
        (1..=7).map(PageMarker::Page).collect::<Vec<_>>()
    );

    // Middle page: still the full-range branch, both directions available.
    app.set_page(5);
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 5, 137)),
    });
    let p = app.effective_pagination();
    assert!(p.has_next);
    assert!(p.has_prev);
    assert_eq!(
        compute_window(5, p.total_pages),
        (1..=7).map(PageMarker::Page).collect::<Vec<_>>()
    );
}

// 5) 500 players at 20 per page, seen from the first page.
#[test]
fn five_hundred_players_window_from_the_first_page() {
    let mut app = AppState::new(20);
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 1, 500)),
    });
    let p = app.effective_pagination();
    assert_eq!(p.total_pages, 25);
    assert_eq!(
        compute_window(p.page, p.total_pages),
        vec![
            PageMarker::Page(1),
            PageMarker::Page(2),
            PageMarker::Ellipsis,
            PageMarker::Page(25),
        ]
    );
}

// 6) A failing refresh shows the error and keeps the old page on screen;
//    a retry with a successful result clears the error again.
#[test]
fn error_then_retry_round_trip() {
    let mut app = AppState::new(20);
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 1, 137)),
    });
    let shown_before = app.players.clone();

    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Err(ApiError::Transport("connection refused".into())),
    });
    assert_eq!(app.players, shown_before);
    assert!(app.error.as_deref().unwrap().contains("connection refused"));

    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response_for("", 1, 137)),
    });
    assert!(app.error.is_none());
    assert!(!app.loading);
}

// 7) Defensive recomputation: an inconsistent server payload cannot produce
//    contradictory pagination controls.
#[test]
fn inconsistent_server_pagination_is_normalized_for_rendering() {
    let mut app = AppState::new(20);
    let mut response = response_for("", 2, 137);
    response.pagination.has_prev = false; // contradicts page=2
    response.pagination.total_pages = 99; // contradicts total=137, limit=20
    let generation = app.begin_fetch();
    app.apply(FetchMessage::Players {
        generation,
        result: Ok(response),
    });

    let p = app.effective_pagination();
    assert_eq!(p.total_pages, 7);
    assert!(p.has_prev);
    assert!(p.has_next);
}

// 8) Debouncer disposal: cancelling on shutdown means a pending commit can
//    never fire afterwards.
#[test]
fn cancelled_debouncer_never_commits() {
    let mut d = Debouncer::default();
    let t0 = Instant::now();
    d.submit("pending", t0);
    d.cancel();
    assert_eq!(d.poll(t0 + Duration::from_secs(60)), None);
}
