use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, Tab};
use crate::schedule::TimeSlot;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => move_previous_day(state),
        KeyCode::Char('l') | KeyCode::Right => move_next_day(state),
        KeyCode::Char('j') | KeyCode::Down => move_down(state),
        KeyCode::Char('k') | KeyCode::Up => move_up(state),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('d') => switch_tab(state, Tab::Day),
        KeyCode::Char('w') => switch_tab(state, Tab::Week),
        KeyCode::Char('m') => switch_tab(state, Tab::Month),
        KeyCode::Char('e') => switch_tab(state, Tab::Events),
        KeyCode::Char('s') => switch_tab(state, Tab::Settings),
        KeyCode::Char('a') => open_add_form(state),
        KeyCode::Char(digit @ '0'..='9') => arm_palette_digit(state, digit),
        KeyCode::Esc => clear_selection(state),
        KeyCode::Enter => handle_enter_key(state),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => shift_month(state, -1),
        KeyCode::Char('}') => shift_month(state, 1),
        _ => {}
    }
}

fn move_previous_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(1)) {
        state.selected_date = new_date;
    }
}

fn move_next_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(1)) {
        state.selected_date = new_date;
    }
}

fn move_down(state: &mut AppState) {
    match state.tab {
        Tab::Day | Tab::Week => move_slot_down(state),
        Tab::Month => move_down_week(state),
        Tab::Events => state.move_events_scroll_down(),
        Tab::Settings => state.move_settings_down(),
    }
}

fn move_up(state: &mut AppState) {
    match state.tab {
        Tab::Day | Tab::Week => move_slot_up(state),
        Tab::Month => move_up_week(state),
        Tab::Events => state.move_events_scroll_up(),
        Tab::Settings => state.move_settings_up(),
    }
}

fn move_slot_down(state: &mut AppState) {
    if state.selected_slot != TimeSlot::FivePm {
        state.selected_slot = state.selected_slot.next();
    }
}

fn move_slot_up(state: &mut AppState) {
    if state.selected_slot != TimeSlot::EightAm {
        state.selected_slot = state.selected_slot.prev();
    }
}

fn move_down_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn move_up_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn jump_to_today(state: &mut AppState) {
    state.selected_date = chrono::Local::now().date_naive();
}

fn switch_tab(state: &mut AppState, tab: Tab) {
    state.tab = tab;
}

fn open_add_form(state: &mut AppState) {
    state.open_form();
    state.mode = Mode::Insert;
}

fn arm_palette_digit(state: &mut AppState, digit: char) {
    let index = match digit {
        '0' => 9,
        _ => (digit as usize).saturating_sub('1' as usize),
    };
    state.arm(index);
}

fn clear_selection(state: &mut AppState) {
    state.disarm();
    state.clear_notice();
}

fn handle_enter_key(state: &mut AppState) {
    match state.tab {
        Tab::Day | Tab::Week => {
            if state.place_armed().is_none() {
                open_add_form(state);
            }
        }
        Tab::Month => state.tab = Tab::Day,
        Tab::Events => {}
        Tab::Settings => state.apply_selected_theme(),
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn show_help(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":help".to_string();
}

fn move_to_start_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        state.selected_date = first;
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1)
        && let Some(last) = last_day_of_month(first)
    {
        state.selected_date = last;
    }
}

fn shift_month(state: &mut AppState, offset: i32) {
    let date = state.selected_date;
    let total = date.year() * 12 + date.month() as i32 - 1 + offset;
    let new_year = total.div_euclid(12);
    let new_month = total.rem_euclid(12) as u32 + 1;

    let Some(first) = NaiveDate::from_ymd_opt(new_year, new_month, 1) else {
        return;
    };
    let Some(last) = last_day_of_month(first) else {
        return;
    };

    let new_day = date.day().min(last.day());
    if let Some(new_date) = NaiveDate::from_ymd_opt(new_year, new_month, new_day) {
        state.selected_date = new_date;
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_first.and_then(|d| d.pred_opt())
}
