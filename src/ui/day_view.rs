use chrono::NaiveDate;

use crate::app::AppState;
use crate::schedule::TimeSlot;

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub rows: Vec<SlotRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub entry: Option<SlotEntry>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotEntry {
    pub icon: String,
    pub title: String,
}

pub fn calculate_layout(state: &AppState) -> DayLayout {
    let date = state.selected_date;
    let today = chrono::Local::now().date_naive();

    let rows = TimeSlot::ALL
        .into_iter()
        .map(|slot| SlotRow {
            slot,
            entry: state.planner.lookup_on(date, slot).map(|record| SlotEntry {
                icon: record.icon.clone(),
                title: record.title.clone(),
            }),
            is_selected: slot == state.selected_slot,
        })
        .collect();

    DayLayout {
        date,
        is_today: date == today,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EventRecord;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn place(state: &mut AppState, day: NaiveDate, slot: TimeSlot, icon: &str, title: &str) {
        state
            .planner
            .place(day.and_time(NaiveTime::MIN), slot, EventRecord::new(icon, title));
    }

    #[test]
    fn day_layout_has_the_selected_date() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);

        let layout = calculate_layout(&state);

        assert_eq!(layout.date, date(2024, 1, 10));
    }

    #[test]
    fn day_layout_has_one_row_per_slot() {
        let state = AppState::new();

        let layout = calculate_layout(&state);

        assert_eq!(layout.rows.len(), TimeSlot::ALL.len());
    }

    #[test]
    fn rows_are_in_slot_order() {
        let state = AppState::new();

        let layout = calculate_layout(&state);

        for (row, slot) in layout.rows.iter().zip(TimeSlot::ALL) {
            assert_eq!(row.slot, slot);
        }
    }

    #[test]
    fn placed_event_appears_in_its_row() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);
        place(&mut state, date(2024, 1, 10), TimeSlot::NineAm, "🎒", "School");

        let layout = calculate_layout(&state);

        let row = &layout.rows[1];
        assert_eq!(row.slot, TimeSlot::NineAm);
        assert_eq!(
            row.entry,
            Some(SlotEntry {
                icon: "🎒".to_string(),
                title: "School".to_string(),
            })
        );
    }

    #[test]
    fn other_days_do_not_leak_into_the_layout() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);
        place(&mut state, date(2024, 1, 11), TimeSlot::NineAm, "🎒", "School");

        let layout = calculate_layout(&state);

        assert!(layout.rows.iter().all(|row| row.entry.is_none()));
    }

    #[test]
    fn empty_slots_have_no_entry() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 10);

        let layout = calculate_layout(&state);

        assert!(layout.rows.iter().all(|row| row.entry.is_none()));
    }

    #[test]
    fn selected_slot_row_is_flagged() {
        let mut state = AppState::new();
        state.selected_slot = TimeSlot::Noon;

        let layout = calculate_layout(&state);

        let flagged: Vec<TimeSlot> = layout
            .rows
            .iter()
            .filter(|row| row.is_selected)
            .map(|row| row.slot)
            .collect();
        assert_eq!(flagged, vec![TimeSlot::Noon]);
    }

    #[test]
    fn is_today_flag_set_correctly() {
        let mut state = AppState::new();
        state.selected_date = chrono::Local::now().date_naive();

        let layout = calculate_layout(&state);

        assert!(layout.is_today);
    }

    #[test]
    fn is_today_flag_false_for_other_days() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 1);

        let layout = calculate_layout(&state);

        assert!(!layout.is_today);
    }
}
