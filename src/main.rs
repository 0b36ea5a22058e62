mod cli;
use cli::{parse_cli_mode, run_agenda_mode, CliMode};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: dayplan [--agenda [YYYY/MM/DD]] [--sample]");
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::AgendaDate { date, sample } => run_agenda_mode(date, sample)?,
        CliMode::Default { sample } => run_tui(sample)?,
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("dayplan"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "dayplan.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("dayplan started");
}
