use chrono::NaiveDateTime;

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingLayout {
    pub rows: Vec<UpcomingRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingRow {
    pub starts_at: NaiveDateTime,
    pub date_label: String,
    pub time_label: String,
    pub icon: String,
    pub title: String,
    pub is_selected: bool,
}

pub fn calculate_layout(state: &AppState) -> UpcomingLayout {
    let rows = state
        .planner
        .upcoming_events()
        .iter()
        .enumerate()
        .map(|(index, event)| UpcomingRow {
            starts_at: event.starts_at,
            date_label: event.starts_at.format("%a %b %-d").to_string(),
            time_label: event.starts_at.format("%-I:%M %P").to_string(),
            icon: event.icon.clone(),
            title: event.title.clone(),
            is_selected: index == state.events_scroll,
        })
        .collect();

    UpcomingLayout { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::schedule::{EventRecord, TimeSlot};
    use chrono::{NaiveDate, NaiveTime};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn place(state: &mut AppState, day: NaiveDate, slot: TimeSlot, icon: &str, title: &str) {
        state
            .planner
            .place(day.and_time(NaiveTime::MIN), slot, EventRecord::new(icon, title));
    }

    #[test]
    fn empty_planner_yields_no_rows() {
        let state = AppState::new();

        let layout = calculate_layout(&state);

        assert!(layout.rows.is_empty());
    }

    #[test]
    fn rows_follow_the_upcoming_order() {
        let mut state = AppState::new();
        place(&mut state, date(2024, 2, 1), TimeSlot::NineAm, "🎒", "School");
        place(&mut state, date(2024, 1, 10), TimeSlot::EightAm, "🍎", "Breakfast");

        let layout = calculate_layout(&state);

        let titles: Vec<&str> = layout.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Breakfast", "School"]);
    }

    #[test]
    fn row_labels_carry_date_and_slot_time() {
        let mut state = AppState::new();
        place(&mut state, date(2024, 1, 10), TimeSlot::EightAm, "🍎", "Breakfast");

        let layout = calculate_layout(&state);

        assert_eq!(layout.rows[0].date_label, "Wed Jan 10");
        assert_eq!(layout.rows[0].time_label, "8:00 am");
        assert_eq!(layout.rows[0].icon, "🍎");
    }

    #[test]
    fn scroll_position_marks_the_selected_row() {
        let mut state = AppState::new();
        place(&mut state, date(2024, 1, 10), TimeSlot::EightAm, "🍎", "Breakfast");
        place(&mut state, date(2024, 1, 11), TimeSlot::NineAm, "🎒", "School");
        state.events_scroll = 1;

        let layout = calculate_layout(&state);

        assert!(!layout.rows[0].is_selected);
        assert!(layout.rows[1].is_selected);
    }
}
