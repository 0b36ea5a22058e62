use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::{app::AppState, ui::day_view};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(app);

    let mut day_title = layout.date.format("%A, %B %-d, %Y").to_string();
    if layout.is_today {
        day_title.push_str(" (today)");
    }

    let mut lines = vec![
        Line::from(vec![Span::styled(
            day_title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    for row in &layout.rows {
        let time_label = format!(" {:>8}  ", row.slot.label());

        let (label_style, text_style) = if row.is_selected {
            let base = Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD);
            (base, base)
        } else {
            (
                Style::default().fg(app.theme.slot_label),
                Style::default().fg(app.theme.status_bar),
            )
        };

        let line = match &row.entry {
            Some(entry) => Line::from(vec![
                Span::styled(time_label, label_style),
                Span::styled(format!("{} {}", entry.icon, entry.title), text_style),
            ]),
            None => {
                let empty_style = if row.is_selected {
                    text_style
                } else {
                    Style::default().fg(app.theme.inactive_day)
                };
                Line::from(vec![
                    Span::styled(time_label, label_style),
                    Span::styled("·", empty_style),
                ])
            }
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k", Style::default().fg(app.theme.title)),
        Span::raw(" = Slot | "),
        Span::styled("1-9,0", Style::default().fg(app.theme.armed)),
        Span::raw(" = Arm icon | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Place | "),
        Span::styled("a", Style::default().fg(app.theme.success)),
        Span::raw(" = Form"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
