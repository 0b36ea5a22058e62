use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dayplan::app::{AppState, Mode, Notice, Tab};

use crate::tui::{dialogs, tab_views};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    render_header(f, app, main_chunks[0]);

    match app.tab {
        Tab::Day => tab_views::day::render(f, app, content_chunks[0]),
        Tab::Week => tab_views::week::render(f, app, content_chunks[0]),
        Tab::Month => tab_views::month::render(f, app, content_chunks[0]),
        Tab::Events => tab_views::events::render(f, app, content_chunks[0]),
        Tab::Settings => tab_views::settings::render(f, app, content_chunks[0]),
    }

    tab_views::palette::render(f, app, content_chunks[1]);

    render_status_bar(f, app, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.add_form.is_some() {
        dialogs::add_event::render(f, app);
    }
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        "dayplan",
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    )];

    for tab in Tab::ALL {
        spans.push(Span::raw("  "));
        let style = if tab == app.tab {
            Style::default().fg(app.theme.tab_active).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.inactive_day)
        };
        spans.push(Span::styled(tab.title(), style));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    if app.show_clock {
        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(area);

        let clock = Paragraph::new(app.clock_label())
            .style(Style::default().fg(app.theme.title))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(tabs, header_chunks[0]);
        f.render_widget(clock, header_chunks[1]);
    } else {
        f.render_widget(tabs, area);
    }
}

fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let status_text = if matches!(app.mode, Mode::Command) {
        app.command_buffer.clone()
    } else if let Some(Notice::Info(text) | Notice::Error(text)) = &app.notice {
        text.clone()
    } else if let Some(item) = app.armed_item() {
        format!(
            "{} {} armed | Enter = Place at {} | Esc = Disarm",
            item.icon,
            item.title,
            app.selected_slot.label()
        )
    } else {
        format!(
            "Events: {} | Press 'q' to quit, '?' for help",
            app.planner.placed_count()
        )
    };

    let status_color = if matches!(app.mode, Mode::Command) {
        app.theme.command_mode
    } else {
        match &app.notice {
            Some(Notice::Error(_)) => app.theme.error,
            Some(Notice::Info(_)) => app.theme.success,
            None => app.theme.status_bar,
        }
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) {
            Alignment::Left
        } else {
            Alignment::Center
        })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
