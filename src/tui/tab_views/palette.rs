use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::app::{AppState, PALETTE};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Icons",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    for (index, item) in PALETTE.iter().enumerate() {
        let digit = (index + 1) % 10;
        let is_armed = app.armed == Some(index);

        let (marker, style) = if is_armed {
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
            Span::styled(marker, style),
            Span::styled(
                format!("{} ", digit),
                if is_armed {
                    style
                } else {
                    Style::default().fg(app.theme.armed)
                },
            ),
            Span::styled(format!("{} {}", item.icon, item.title), style),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(item) = app.armed_item() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} armed", item.icon, item.title),
                Style::default().fg(app.theme.armed).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Enter places it at {}", app.selected_slot.label()),
            Style::default().fg(app.theme.slot_label),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Nothing armed",
            Style::default().fg(app.theme.inactive_day),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("1-9,0", Style::default().fg(app.theme.armed)),
        Span::raw(" = Arm | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Place | "),
        Span::styled("Esc", Style::default().fg(app.theme.error)),
        Span::raw(" = Disarm"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Palette "));
    f.render_widget(content, area);
}
