use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;

const CARD_COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 6;

/// Card grid: the same page of records as the table, one bordered card per
/// player, filled left-to-right then top-to-bottom.
pub fn render_player_cards(f: &mut Frame, area: Rect, app: &AppState) {
    let outer = Block::default()
        .title(if app.loading { "Players (loading…)" } else { "Players" })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if app.loading {
        let p = Paragraph::new("░░░░░░░░░░░░░░░░░░░░")
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(p, inner);
        return;
    }
    if app.players.is_empty() {
        let p = Paragraph::new("No players match the current search.")
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(p, inner);
        return;
    }

    let visible_rows = (inner.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }

    // Keep the selected card on screen.
    let selected_row = app.selected_index / CARD_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row_slot, row_area) in rows.iter().enumerate() {
        let row_index = first_row + row_slot;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, CARD_COLUMNS as u32);
                CARD_COLUMNS
            ])
            .split(*row_area);
        for (col, col_area) in cols.iter().enumerate() {
            let index = row_index * CARD_COLUMNS + col;
            let Some(player) = app.players.get(index) else {
                continue;
            };
            let selected = index == app.selected_index;
            let border_style = if selected {
                Style::default()
                    .fg(app.theme.highlight_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.border)
            };
            let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
            let body = format!(
                "{}\n{}\nBorn: {}",
                or_dash(&player.position),
                or_dash(&player.nationality),
                or_dash(&player.date_of_birth),
            );
            let card = Paragraph::new(body)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(app.theme.text))
                .block(
                    Block::default()
                        .title(player.name.clone())
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            f.render_widget(card, *col_area);
        }
    }
}
