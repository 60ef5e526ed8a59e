use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::app::AppState;

/// Placeholder cell content shown while a fetch is in flight.
const SKELETON: &str = "░░░░░░░░░░";

pub fn render_players_table(f: &mut Frame, area: Rect, app: &AppState) {
    let header = Row::new(vec!["NAME", "POSITION", "NATIONALITY", "BORN", "HEIGHT"]).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Length(12),
        Constraint::Percentage(15),
    ];

    let body_height = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = if app.loading {
        skeleton_rows(body_height.min(app.limit as usize), 5)
    } else {
        app.players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let style = if i == app.selected_index {
                    Style::default()
                        .fg(app.theme.highlight_fg)
                        .bg(app.theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text)
                };
                Row::new(vec![
                    Cell::from(p.name.clone()),
                    Cell::from(p.position.clone().unwrap_or_default()),
                    Cell::from(p.nationality.clone().unwrap_or_default()),
                    Cell::from(p.date_of_birth.clone().unwrap_or_default()),
                    Cell::from(p.height.clone().unwrap_or_default()),
                ])
                .style(style)
            })
            .collect()
    };

    let empty = !app.loading && app.players.is_empty();
    let title = if empty { "Players (no results)" } else { "Players" };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);
    f.render_widget(table, area);
}

fn skeleton_rows<'a>(count: usize, columns: usize) -> Vec<Row<'a>> {
    (0..count)
        .map(|_| Row::new(vec![Cell::from(SKELETON); columns]))
        .collect()
}

pub fn render_player_details(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.selected_player() {
        Some(p) if !app.loading => {
            let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
            format!(
                "Name: {}\nFull name: {}\nBorn: {}\nPlace of birth: {}\nHeight: {}\nPosition: {}\nNationality: {}\n\nSource: {}",
                p.name,
                or_dash(&p.full_name),
                or_dash(&p.date_of_birth),
                or_dash(&p.place_of_birth),
                or_dash(&p.height),
                or_dash(&p.position),
                or_dash(&p.nationality),
                p.wikipedia_url,
            )
        }
        _ => String::new(),
    };
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}
