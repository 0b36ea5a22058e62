use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dayplan::{
    app::{AppState, Mode, Notice, PlaceOutcome, Tab},
    input::{command_mode, insert_mode, normal_mode},
    storage::config::Config,
    ui::theme::Theme,
};

use crate::tui::{presentation::ui, sample_plan::seed_sample_plan};

const CLOCK_TICK: Duration = Duration::from_secs(60);

pub fn run_tui(sample: bool) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    let mut app = AppState::new()
        .with_theme(theme)
        .with_clock(config.ui.show_clock);
    app.tab = default_tab(&config.ui.default_tab);

    if sample || config.planner.load_sample {
        seed_sample_plan(&mut app.planner);
    }

    let res = run_app(&mut terminal, &mut app, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn default_tab(name: &str) -> Tab {
    match name.to_lowercase().as_str() {
        "week" => Tab::Week,
        "month" => Tab::Month,
        "events" => Tab::Events,
        "settings" => Tab::Settings,
        _ => Tab::Day,
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    mut config: Config,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if last_tick.elapsed() >= CLOCK_TICK {
            app.tick_clock();
            last_tick = Instant::now();
        }

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => normal_mode::handle_key(key.code, app),
                        }
                    }
                }
                Mode::Command => {
                    if handle_command_mode(key.code, app)? {
                        return Ok(());
                    }
                }
                Mode::Insert => handle_insert_mode(key.code, app),
            }

            persist_theme_choice(app, &mut config);
        }
    }
}

fn persist_theme_choice(app: &AppState, config: &mut Config) {
    if app.theme.name != config.ui.theme {
        config.ui.theme = app.theme.name.clone();
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_command_mode(code: KeyCode, app: &mut AppState) -> io::Result<bool> {
    match code {
        KeyCode::Enter => {
            let command_text = app.command_buffer.clone();
            app.command_buffer.clear();
            app.mode = Mode::Normal;

            match command_mode::parse_command(&command_text) {
                command_mode::Command::Quit => return Ok(true),
                command_mode::Command::Goto(date) => {
                    app.selected_date = date;
                }
                command_mode::Command::Help => {
                    app.show_help = !app.show_help;
                }
                command_mode::Command::Theme(theme_name) => {
                    app.theme = Theme::get_by_name(&theme_name);
                }
                command_mode::Command::NewEvent(title) => {
                    app.open_form();
                    if let Some(form) = app.add_form.as_mut()
                        && let Some(title) = title
                    {
                        form.title = title;
                    }
                    app.mode = Mode::Insert;
                }
                command_mode::Command::Error(message) => {
                    app.notice = Some(Notice::Error(message));
                }
            }
            Ok(false)
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            Ok(false)
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_insert_mode(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Esc => {
            app.cancel_form();
            app.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            if app.submit_form() == Some(PlaceOutcome::Placed) {
                app.mode = Mode::Normal;
            }
        }
        _ => insert_mode::handle_key(code, app),
    }
}
