//! Application state types and entry glue.
//!
//! `AppState` owns everything the UI renders: the committed query, the
//! latest fetched page of players, loading/error flags, and the view
//! selection. All mutation happens on the event-loop thread; fetch tasks
//! only post messages back (see [`FetchMessage`]).

pub mod update;

use std::time::Instant;

use ratatui::style::Color;
use tracing::debug;

use crate::api::{PaginationInfo, Player, PlayersResponse, Stats};
use crate::debounce::Debouncer;
use crate::error::ApiError;

/// How player records are laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    StatsModal,
}

/// The committed query the displayed records correspond to.
///
/// Changing `search` always resets `page` to 1; `page` is only ever set to
/// values the pagination control can emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub page: u32,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub error_fg: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
            error_fg: Color::Red,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
        }
    }
}

/// Completion message posted by a fetch task back to the event loop.
#[derive(Debug)]
pub enum FetchMessage {
    Players {
        /// Token issued by [`AppState::begin_fetch`]; results whose token is
        /// no longer the latest are discarded.
        generation: u64,
        result: Result<PlayersResponse, ApiError>,
    },
    Stats {
        result: Result<Stats, ApiError>,
    },
}

pub struct AppState {
    pub started_at: Instant,
    pub query: QueryState,
    pub limit: u32,
    pub players: Vec<Player>,
    pub pagination: PaginationInfo,
    pub stats: Option<Stats>,
    pub loading: bool,
    pub error: Option<String>,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    /// Live contents of the search box; updates on every keystroke while
    /// the committed query only changes through the debouncer.
    pub search_input: String,
    pub debouncer: Debouncer,
    pub selected_index: usize,
    pub theme: Theme,
    generation: u64,
}

impl AppState {
    pub fn new(limit: u32) -> Self {
        Self {
            started_at: Instant::now(),
            query: QueryState {
                search: String::new(),
                page: 1,
            },
            limit,
            players: Vec::new(),
            pagination: PaginationInfo::empty(limit),
            stats: None,
            loading: false,
            error: None,
            view_mode: ViewMode::Table,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            debouncer: Debouncer::default(),
            selected_index: 0,
            theme: Theme::mocha(),
            generation: 0,
        }
    }

    /// Pagination metadata with derived fields recomputed for rendering.
    pub fn effective_pagination(&self) -> PaginationInfo {
        self.pagination.normalized()
    }

    /// Mark a fetch as started and return the token its result must carry.
    ///
    /// Bumping the generation here is what invalidates any still-in-flight
    /// request: its completion message will arrive with a stale token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Install a fetch result. Stale player responses are dropped; errors
    /// keep the previously displayed records alongside the error message.
    pub fn apply(&mut self, msg: FetchMessage) {
        match msg {
            FetchMessage::Players { generation, result } => {
                if generation != self.generation {
                    debug!(generation, latest = self.generation, "dropping stale response");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(response) => {
                        self.players = response.players;
                        self.pagination = response.pagination;
                        self.error = None;
                        self.selected_index = self
                            .selected_index
                            .min(self.players.len().saturating_sub(1));
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                    }
                }
            }
            FetchMessage::Stats { result } => match result {
                Ok(stats) => self.stats = Some(stats),
                Err(err) => self.error = Some(err.to_string()),
            },
        }
    }

    /// Commit a new search value. Returns whether a refresh is needed.
    pub fn commit_search(&mut self, search: String) -> bool {
        if search == self.query.search {
            return false;
        }
        self.query.search = search;
        // A new search always starts at page 1.
        self.query.page = 1;
        self.selected_index = 0;
        true
    }

    /// Jump to `page` if it is in range and different from the current one.
    /// Returns whether a refresh is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let total_pages = self.effective_pagination().total_pages;
        if page < 1 || page > total_pages || page == self.query.page {
            return false;
        }
        self.query.page = page;
        self.selected_index = 0;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.query.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.query.page.saturating_sub(1))
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.players.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.players.get(self.selected_index)
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
