//! Shared UI components (status bar, pagination bar, banners, modals).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode, ViewMode};
use crate::pagination::{PageMarker, compute_window};

/// Render the bottom status bar with mode, view and paging summary.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::StatsModal => "STATS",
    };
    let view = match app.view_mode {
        ViewMode::Table => "table",
        ViewMode::Cards => "cards",
    };
    let pagination = app.effective_pagination();
    let loading = if app.loading { "  loading…" } else { "" };
    let msg = format!(
        "mode: {mode}  view: {view}  page {}/{}  ·  {} total players{loading}",
        pagination.page, pagination.total_pages, pagination.total,
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Render the page-number row. Suppressed entirely when the window is
/// empty (a single page of results needs no controls).
pub fn render_pagination_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let pagination = app.effective_pagination();
    let window = compute_window(pagination.page, pagination.total_pages);
    if window.is_empty() {
        return;
    }

    let active = Style::default()
        .fg(app.theme.highlight_fg)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let inactive = Style::default().fg(app.theme.text);
    let disabled = Style::default().fg(app.theme.muted);

    let mut spans = Vec::with_capacity(window.len() * 2 + 4);
    spans.push(Span::styled(
        "« Prev ",
        if pagination.has_prev { inactive } else { disabled },
    ));
    for marker in &window {
        match marker {
            PageMarker::Page(page) => {
                let style = if *page == pagination.page { active } else { inactive };
                spans.push(Span::styled(format!(" {page} "), style));
            }
            PageMarker::Ellipsis => spans.push(Span::styled(" … ", disabled)),
        }
    }
    spans.push(Span::styled(
        " Next »",
        if pagination.has_next { inactive } else { disabled },
    ));
    spans.push(Span::styled(
        format!(
            "   showing page {} of {} · {} total players",
            pagination.page, pagination.total_pages, pagination.total
        ),
        disabled,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the failure banner above the (still visible) previous results.
pub fn render_error_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(error) = &app.error else {
        return;
    };
    let p = Paragraph::new(format!("⚠ Failed to load players: {error}  — press r to retry"))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.error_fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error_fg)),
        );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the collection statistics modal.
pub fn render_stats_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let width = 56u16.min(area.width.saturating_sub(4)).max(40);
    let height = 18u16.min(area.height.saturating_sub(4)).max(10);
    let rect = centered_rect(width, height, area);

    let mut lines: Vec<Line> = Vec::new();
    match &app.stats {
        Some(stats) => {
            lines.push(Line::from(format!("Total players: {}", stats.total_players)));
            lines.push(Line::from(format!(
                "With date of birth: {}",
                stats.with_date_of_birth
            )));
            lines.push(Line::from(format!("With height: {}", stats.with_height)));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "Top positions:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (name, count) in top_n(&stats.positions, 5) {
                lines.push(Line::from(format!("  {name}: {count}")));
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "Top nationalities:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (name, count) in top_n(&stats.nationalities, 5) {
                lines.push(Line::from(format!("  {name}: {count}")));
            }
        }
        None => lines.push(Line::from("Loading stats…")),
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Esc / Enter: close",
        Style::default().fg(app.theme.muted),
    )));

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Collection stats")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

fn top_n(map: &std::collections::BTreeMap<String, u64>, n: usize) -> Vec<(&String, u64)> {
    let mut entries: Vec<(&String, u64)> = map.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}
