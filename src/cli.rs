use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Local, NaiveDate};

use dayplan::schedule::Planner;

use crate::tui::sample_plan::seed_sample_plan;

#[derive(Clone, Copy)]
pub enum CliMode {
    Default { sample: bool },
    AgendaDate { date: NaiveDate, sample: bool },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut sample = false;
    let mut agenda_date = None;
    let mut args = env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--agenda" => {
                let target_date = if let Some(next) = args.peek() {
                    if !next.starts_with("--") {
                        let date_str = args.next().expect("peeked value must exist");
                        NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                            .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?
                    } else {
                        Local::now().date_naive()
                    }
                } else {
                    Local::now().date_naive()
                };
                agenda_date = Some(target_date);
            }
            "--help" => {
                println!("Usage: dayplan [--agenda [YYYY/MM/DD]] [--sample]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    match agenda_date {
        Some(date) => Ok(CliMode::AgendaDate { date, sample }),
        None => Ok(CliMode::Default { sample }),
    }
}

pub fn run_agenda_mode(date: NaiveDate, sample: bool) -> Result<(), io::Error> {
    let mut planner = Planner::new();
    if sample {
        seed_sample_plan(&mut planner);
    }

    let agenda = format_agenda_text(date, &planner);
    display_with_pager(&agenda)
}

fn format_agenda_text(date: NaiveDate, planner: &Planner) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda – {}", date.format("%A, %B %d, %Y")));
    lines.push(String::new());

    let entries = planner.slots_on(date);
    if entries.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for (slot, record) in entries {
            lines.push(format!("- {:>8}  {} {}", slot.label(), record.icon, record.title));
        }
    }

    lines.join("\n")
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            print!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            print!("{text}");
        }
    }

    Ok(())
}
