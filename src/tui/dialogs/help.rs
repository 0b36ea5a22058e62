use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use dayplan::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60;
    let help_height = 23;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("dayplan Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Slot, week, scroll or setting (per tab)"),
        Line::from("  t        - Jump to today"),
        Line::from("  g/G      - First/last day of month"),
        Line::from("  { / }    - Previous/next month"),
        Line::from(""),
        Line::from(vec![Span::styled("Tabs:", Style::default().fg(app.theme.help_section))]),
        Line::from("  d/w/m    - Day/Week/Month view"),
        Line::from("  e        - Upcoming events"),
        Line::from("  s        - Settings"),
        Line::from(""),
        Line::from(vec![Span::styled("Placing Events:", Style::default().fg(app.theme.help_section))]),
        Line::from("  1-9,0    - Arm a palette icon"),
        Line::from("  Enter    - Place armed icon at the selected slot"),
        Line::from("  Esc      - Disarm / dismiss notice"),
        Line::from("  a        - Add event form (insert mode)"),
        Line::from("  :new     - Create event (:new Piano lesson)"),
        Line::from(""),
        Line::from(vec![Span::styled("Form:", Style::default().fg(app.theme.help_section))]),
        Line::from("  Tab      - Next field"),
        Line::from("  h/l, ←/→ - Cycle icon or time slot"),
        Line::from("  Enter    - Place the event"),
        Line::from("  Esc      - Cancel"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2024-01-10)"),
        Line::from("  :theme   - Change theme (:theme gruvbox)"),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
