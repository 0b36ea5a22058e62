use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::schedule::TimeSlot;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub entries: Vec<SlotCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotCell {
    pub slot: TimeSlot,
    pub icon: String,
    pub title: String,
}

impl WeekLayout {
    pub fn week_of_date(date: NaiveDate) -> NaiveDate {
        let days_from_monday = date.weekday().num_days_from_monday() as u64;
        date.checked_sub_days(chrono::Days::new(days_from_monday))
            .unwrap_or(date)
    }
}

pub fn calculate_layout(state: &AppState) -> WeekLayout {
    let week_start = WeekLayout::week_of_date(state.selected_date);
    let today = chrono::Local::now().date_naive();

    let mut days = Vec::new();

    for day_offset in 0..7u64 {
        let Some(date) = week_start.checked_add_days(chrono::Days::new(day_offset)) else {
            continue;
        };

        let entries = state
            .planner
            .slots_on(date)
            .into_iter()
            .map(|(slot, record)| SlotCell {
                slot,
                icon: record.icon.clone(),
                title: record.title.clone(),
            })
            .collect();

        days.push(DayColumn {
            date,
            is_selected: date == state.selected_date,
            is_today: date == today,
            entries,
        });
    }

    WeekLayout { week_start, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EventRecord;
    use chrono::{NaiveTime, Weekday};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn place(state: &mut AppState, day: NaiveDate, slot: TimeSlot, icon: &str, title: &str) {
        state
            .planner
            .place(day.and_time(NaiveTime::MIN), slot, EventRecord::new(icon, title));
    }

    #[test]
    fn week_of_date_returns_monday() {
        let wednesday = date(2024, 1, 10);
        let monday = WeekLayout::week_of_date(wednesday);
        assert_eq!(monday, date(2024, 1, 8));
        assert_eq!(monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn week_of_date_for_monday_returns_same_date() {
        let monday = date(2024, 1, 8);
        assert_eq!(WeekLayout::week_of_date(monday), monday);
    }

    #[test]
    fn week_of_date_for_sunday_returns_previous_monday() {
        let sunday = date(2024, 1, 14);
        assert_eq!(WeekLayout::week_of_date(sunday), date(2024, 1, 8));
    }

    #[test]
    fn week_layout_has_seven_days() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);

        let layout = calculate_layout(&state);

        assert_eq!(layout.days.len(), 7);
    }

    #[test]
    fn week_layout_runs_monday_through_sunday() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);

        let layout = calculate_layout(&state);

        assert_eq!(layout.days[0].date.weekday(), Weekday::Mon);
        assert_eq!(layout.days[6].date.weekday(), Weekday::Sun);
    }

    #[test]
    fn selected_date_is_marked() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);

        let layout = calculate_layout(&state);

        let selected: Vec<_> = layout.days.iter().filter(|d| d.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 1, 10));
    }

    #[test]
    fn occupied_slots_appear_in_their_day_column() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);
        place(&mut state, date(2024, 1, 10), TimeSlot::EightAm, "🍎", "Breakfast");
        place(&mut state, date(2024, 1, 10), TimeSlot::ThreePm, "⚽", "Practice");

        let layout = calculate_layout(&state);

        let wednesday = &layout.days[2];
        assert_eq!(wednesday.entries.len(), 2);
        assert_eq!(wednesday.entries[0].slot, TimeSlot::EightAm);
        assert_eq!(wednesday.entries[1].slot, TimeSlot::ThreePm);
    }

    #[test]
    fn empty_days_have_no_entries() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);
        place(&mut state, date(2024, 1, 10), TimeSlot::EightAm, "🍎", "Breakfast");

        let layout = calculate_layout(&state);

        assert!(layout.days[0].entries.is_empty());
        assert!(layout.days[6].entries.is_empty());
    }

    #[test]
    fn other_weeks_do_not_leak_into_the_layout() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);
        place(&mut state, date(2024, 1, 17), TimeSlot::EightAm, "🍎", "Breakfast");

        let layout = calculate_layout(&state);

        assert!(layout.days.iter().all(|day| day.entries.is_empty()));
    }
}
