use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use dayplan::app::{AppState, FormField, PALETTE};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.add_form else {
        return;
    };

    let area = f.size();
    let form_width = 60;
    let form_height = 14;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;

    let palette_item = PALETTE[form.icon_index];

    let form_text = vec![
        Line::from(vec![Span::styled("Add Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Icon: ", Style::default().fg(if form.active_field == FormField::Icon { active_color } else { inactive_color })),
            Span::raw(format!("{} ({})", palette_item.icon, palette_item.title)),
            Span::styled(if form.active_field == FormField::Icon { " [h/l or 1-9,0]" } else { "" }, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(if form.active_field == FormField::Title { active_color } else { inactive_color })),
            Span::raw(&form.title),
            Span::styled(if form.active_field == FormField::Title && form.title.is_empty() { " [type a title]" } else { "" }, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(if form.active_field == FormField::Slot { active_color } else { inactive_color })),
            Span::raw(form.slot.label()),
            Span::styled(if form.active_field == FormField::Slot { " [h/l to cycle]" } else { "" }, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(inactive_color)),
            Span::raw(form.date.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Place | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
