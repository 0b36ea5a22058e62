use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::{app::AppState, ui::month_view};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            app.selected_date.format("%B %Y").to_string(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    let header_spans: Vec<Span> = WEEKDAY_LABELS
        .iter()
        .map(|label| {
            Span::styled(
                format!(" {:>3} ", label),
                Style::default()
                    .fg(app.theme.weekday_header)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(header_spans));

    for week in &layout.weeks {
        let mut week_spans = Vec::with_capacity(7);
        for cell in &week.days {
            let mut style = if cell.is_selected {
                Style::default()
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if cell.is_today {
                Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
            } else if cell.is_current_month {
                Style::default().fg(app.theme.status_bar)
            } else {
                Style::default().fg(app.theme.inactive_day)
            };
            if cell.has_events {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            week_spans.push(Span::styled(format!(" {:>3} ", cell.date.day()), style));
        }
        lines.push(Line::from(week_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Events for {}", app.selected_date.format("%A, %b %-d")),
        Style::default()
            .fg(app.theme.help_section)
            .add_modifier(Modifier::BOLD),
    )));
    let day_events = app.planner.slots_on(app.selected_date);
    if day_events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events",
            Style::default().fg(app.theme.inactive_day),
        )));
    } else {
        for (slot, record) in day_events {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>8}  ", slot.label()),
                    Style::default().fg(app.theme.slot_label),
                ),
                Span::raw(format!("{} {}", record.icon, record.title)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/j/k/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Move | "),
        Span::styled("{/}", Style::default().fg(app.theme.title)),
        Span::raw(" = Month | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Open day"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
