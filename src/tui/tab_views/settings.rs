use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Settings",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(Span::styled(
            "Theme",
            Style::default()
                .fg(app.theme.help_section)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for (index, name) in Theme::available_themes().iter().enumerate() {
        let is_cursor = index == app.settings_index;
        let is_active = *name == app.theme.name;

        let marker = if is_cursor { "> " } else { "  " };
        let style = if is_cursor {
            Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.status_bar)
        };

        let mut spans = vec![Span::styled(format!("{}{}", marker, name), style)];
        if is_active {
            spans.push(Span::styled(
                "  (active)",
                Style::default().fg(app.theme.success),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k", Style::default().fg(app.theme.title)),
        Span::raw(" = Select | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Apply"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
