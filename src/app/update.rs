//! Event loop: key handling, debounce polling, and fetch orchestration.
//!
//! All state mutation happens here, on one thread. Fetches are spawned on
//! the tokio runtime and post [`FetchMessage`]s back over an mpsc channel;
//! the loop drains that channel between frames, so a response is only ever
//! applied by the same thread that issued it.

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::api::ApiClient;
use crate::app::{AppState, FetchMessage, InputMode};
use crate::ui;

/// How long to block waiting for a key before the loop services the
/// debouncer and the fetch channel again. Bounds debounce-commit latency.
const TICK: Duration = Duration::from_millis(50);

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    client: ApiClient,
    runtime: tokio::runtime::Handle,
    limit: u32,
) -> Result<()> {
    let mut app = AppState::new(limit);
    let (tx, rx) = std::sync::mpsc::channel::<FetchMessage>();

    // Initial load of page 1, empty search.
    spawn_players_fetch(&mut app, &client, &runtime, &tx);

    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        drain_messages(&mut app, &rx);

        // A committed (quiet-period elapsed) search triggers exactly one
        // refresh, and only if the value actually changed.
        if let Some(search) = app.debouncer.poll(Instant::now())
            && app.commit_search(search)
        {
            spawn_players_fetch(&mut app, &client, &runtime, &tx);
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.input_mode {
                        InputMode::Normal => {
                            if !handle_normal_key(&mut app, key.code, &client, &runtime, &tx) {
                                break;
                            }
                        }
                        InputMode::Search => {
                            handle_search_key(&mut app, key.code, &client, &runtime, &tx);
                        }
                        InputMode::StatsModal => match key.code {
                            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                                app.input_mode = InputMode::Normal;
                            }
                            _ => {}
                        },
                    }
                }
            }
        }
    }

    // Disposal: a commit must never fire after the loop has exited.
    app.debouncer.cancel();
    Ok(())
}

fn drain_messages(app: &mut AppState, rx: &Receiver<FetchMessage>) {
    while let Ok(msg) = rx.try_recv() {
        app.apply(msg);
    }
}

/// Handle a key in normal mode. Returns `false` to quit.
fn handle_normal_key(
    app: &mut AppState,
    code: KeyCode,
    client: &ApiClient,
    runtime: &tokio::runtime::Handle,
    tx: &Sender<FetchMessage>,
) -> bool {
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Tab | KeyCode::Char('v') => {
            app.view_mode = app.view_mode.toggled();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.prev_page() {
                spawn_players_fetch(app, client, runtime, tx);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.next_page() {
                spawn_players_fetch(app, client, runtime, tx);
            }
        }
        KeyCode::Home => {
            if app.set_page(1) {
                spawn_players_fetch(app, client, runtime, tx);
            }
        }
        KeyCode::End => {
            let last = app.effective_pagination().total_pages;
            if app.set_page(last) {
                spawn_players_fetch(app, client, runtime, tx);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('r') => {
            // Retry the current query after an error (or just refresh).
            spawn_players_fetch(app, client, runtime, tx);
        }
        KeyCode::Char('s') => {
            app.input_mode = InputMode::StatsModal;
            if app.stats.is_none() {
                spawn_stats_fetch(client, runtime, tx);
            }
        }
        _ => {}
    }
    true
}

fn handle_search_key(
    app: &mut AppState,
    code: KeyCode,
    client: &ApiClient,
    runtime: &tokio::runtime::Handle,
    tx: &Sender<FetchMessage>,
) {
    match code {
        KeyCode::Enter => {
            // Commit whatever is pending right away and go back to browsing.
            if let Some(search) = app.debouncer.flush()
                && app.commit_search(search)
            {
                spawn_players_fetch(app, client, runtime, tx);
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            // Explicit clear: empty search takes effect immediately,
            // bypassing the debounce delay.
            app.search_input.clear();
            app.debouncer.cancel();
            if app.commit_search(String::new()) {
                spawn_players_fetch(app, client, runtime, tx);
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.debouncer.submit(app.search_input.clone(), Instant::now());
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.debouncer.submit(app.search_input.clone(), Instant::now());
        }
        _ => {}
    }
}

/// Spawn a `/players` fetch for the current query on the runtime.
///
/// The task owns clones of everything it needs; its result comes back
/// tagged with the generation issued here.
fn spawn_players_fetch(
    app: &mut AppState,
    client: &ApiClient,
    runtime: &tokio::runtime::Handle,
    tx: &Sender<FetchMessage>,
) {
    let generation = app.begin_fetch();
    let search = app.query.search.clone();
    let page = app.query.page;
    let limit = app.limit;
    let client = client.clone();
    let tx = tx.clone();
    info!(generation, %search, page, "refresh");
    runtime.spawn(async move {
        let result = client.fetch_players(&search, page, limit).await;
        // The receiver is gone once the loop exits; nothing to do then.
        let _ = tx.send(FetchMessage::Players { generation, result });
    });
}

fn spawn_stats_fetch(
    client: &ApiClient,
    runtime: &tokio::runtime::Handle,
    tx: &Sender<FetchMessage>,
) {
    let client = client.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client.fetch_stats().await;
        let _ = tx.send(FetchMessage::Stats { result });
    });
}
