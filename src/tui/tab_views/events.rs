use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::{app::AppState, ui::events_view};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = events_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("Upcoming Events ({})", layout.rows.len()),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    if layout.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No upcoming events",
            Style::default().fg(app.theme.inactive_day),
        )));
    } else {
        let visible_rows = (area.height as usize).saturating_sub(6).max(1);
        let first_visible = layout
            .rows
            .iter()
            .position(|row| row.is_selected)
            .unwrap_or(0)
            .saturating_sub(visible_rows - 1);

        for row in layout.rows.iter().skip(first_visible).take(visible_rows) {
            let (marker, row_style) = if row.is_selected {
                (
                    "> ",
                    Style::default()
                        .bg(app.theme.selected_bg)
                        .fg(app.theme.selected_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(app.theme.status_bar))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, row_style),
                Span::styled(format!("{:<11}", row.date_label), row_style),
                Span::styled(
                    format!("{:>8}  ", row.time_label),
                    if row.is_selected {
                        row_style
                    } else {
                        Style::default().fg(app.theme.slot_label)
                    },
                ),
                Span::styled(format!("{} {}", row.icon, row.title), row_style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k", Style::default().fg(app.theme.title)),
        Span::raw(" = Scroll | "),
        Span::styled("d/w/m", Style::default().fg(app.theme.title)),
        Span::raw(" = Calendar views"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
