use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::{app::AppState, schedule::TimeSlot, ui::week_view};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("Week of {}", layout.week_start.format("%B %-d, %Y")),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    let mut header_spans = vec![Span::raw(" ".repeat(10))];
    for day in &layout.days {
        let cell = format!(" {:>3} {:<2} ", day.date.format("%a"), day.date.day());
        let style = if day.is_selected {
            Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };
        header_spans.push(Span::styled(cell, style));
    }
    lines.push(Line::from(header_spans));

    for slot in TimeSlot::ALL {
        let mut row_spans = Vec::with_capacity(layout.days.len() + 1);
        let label_style = if slot == app.selected_slot {
            Style::default().fg(app.theme.selected_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.slot_label)
        };
        row_spans.push(Span::styled(format!(" {:>8} ", slot.label()), label_style));

        for day in &layout.days {
            let entry = day.entries.iter().find(|cell| cell.slot == slot);
            let is_cursor = day.is_selected && slot == app.selected_slot;
            let style = if is_cursor {
                Style::default()
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_some() {
                Style::default().fg(app.theme.status_bar)
            } else {
                Style::default().fg(app.theme.inactive_day)
            };
            let cell = match entry {
                Some(cell) => format!(" {:<6} ", cell.icon),
                None => format!(" {:<6} ", "·"),
            };
            row_spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(""));
    if let Some(day) = layout.days.iter().find(|day| day.is_selected) {
        if day.entries.is_empty() {
            lines.push(Line::from(Span::styled(
                "No events on the selected day",
                Style::default().fg(app.theme.inactive_day),
            )));
        } else {
            for cell in &day.entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {:>8}  ", cell.slot.label()),
                        Style::default().fg(app.theme.slot_label),
                    ),
                    Span::raw(format!("{} {}", cell.icon, cell.title)),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Day | "),
        Span::styled("j/k", Style::default().fg(app.theme.title)),
        Span::raw(" = Slot | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Place armed icon"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
