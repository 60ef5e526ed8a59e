pub mod cards;
pub mod components;
pub mod table;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, ViewMode};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    render_header(f, root[0], app);

    // An error keeps the last successful page of data visible below it.
    let content = if app.error.is_some() {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)].as_ref())
            .split(root[1]);
        components::render_error_banner(f, body[0], app);
        body[1]
    } else {
        root[1]
    };

    match app.view_mode {
        ViewMode::Table => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
                .split(content);
            table::render_players_table(f, panes[0], app);
            table::render_player_details(f, panes[1], app);
        }
        ViewMode::Cards => {
            cards::render_player_cards(f, content, app);
        }
    }

    components::render_pagination_bar(f, root[2], app);
    components::render_status_bar(f, root[3], app);

    if app.input_mode == InputMode::StatsModal {
        components::render_stats_modal(f, f.area(), app);
    }
}

fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let pagination = app.effective_pagination();
    let search = match app.input_mode {
        InputMode::Search => format!("  Search: {}_", app.search_input),
        _ if !app.search_input.is_empty() => format!("  Search: {}", app.search_input),
        _ => String::new(),
    };
    let found = if !app.query.search.is_empty() && !app.loading {
        format!("  {} players found", pagination.total)
    } else {
        String::new()
    };
    let p = Paragraph::new(format!(
        "pl-explorer{search}{found}  — /: search; Tab: table/cards; ←/→: page; s: stats; r: refresh; q: quit",
    ))
    .block(
        Block::default()
            .title("Premier League Player Explorer")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(
        Style::default()
            .fg(app.theme.header_fg)
            .bg(app.theme.header_bg),
    );
    f.render_widget(p, area);
}
