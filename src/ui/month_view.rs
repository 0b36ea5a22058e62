use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::ui::week_view::WeekLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            has_events: false,
            is_current_month: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }
}

pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    let today = chrono::Local::now().date_naive();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut cursor = WeekLayout::week_of_date(first_day);

    loop {
        let mut week = Week { days: Vec::new() };
        for _ in 0..7 {
            let cell = DayCell::new(cursor)
                .with_selected(cursor == state.selected_date)
                .with_today(cursor == today)
                .with_events(state.planner.has_events_on(cursor))
                .with_current_month(cursor.year() == year && cursor.month() == month);
            week.days.push(cell);

            let Some(next) = cursor.succ_opt() else {
                weeks.push(week);
                return MonthLayout { year, month, weeks };
            };
            cursor = next;
        }
        weeks.push(week);

        if cursor.year() != year || cursor.month() != month {
            break;
        }
    }

    MonthLayout { year, month, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{EventRecord, TimeSlot};
    use chrono::{NaiveTime, Weekday};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn place(state: &mut AppState, day: NaiveDate, slot: TimeSlot) {
        state.planner.place(
            day.and_time(NaiveTime::MIN),
            slot,
            EventRecord::new("🍎", "Breakfast"),
        );
    }

    #[test]
    fn month_layout_has_correct_year_and_month() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        assert_eq!(layout.year, 2024);
        assert_eq!(layout.month, 5);
    }

    #[test]
    fn each_week_has_seven_days() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        assert!(!layout.weeks.is_empty());
        for week in &layout.weeks {
            assert_eq!(week.days.len(), 7);
        }
    }

    #[test]
    fn grid_starts_on_a_monday() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        assert_eq!(layout.weeks[0].days[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn grid_covers_every_day_of_the_month() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        let in_month: Vec<NaiveDate> = layout
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .filter(|c| c.is_current_month)
            .map(|c| c.date)
            .collect();

        assert_eq!(in_month.first(), Some(&date(2024, 5, 1)));
        assert_eq!(in_month.last(), Some(&date(2024, 5, 31)));
        assert_eq!(in_month.len(), 31);
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_cells() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 1, 15);

        let layout = calculate_layout(&state);

        assert_eq!(layout.weeks[0].days[0].date, date(2024, 1, 1));
        assert!(layout.weeks[0].days[0].is_current_month);
    }

    #[test]
    fn selected_date_is_marked_in_layout() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        let selected: Vec<_> = layout
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .filter(|c| c.is_selected)
            .collect();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 5, 15));
    }

    #[test]
    fn cells_with_placements_are_marked() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);
        place(&mut state, date(2024, 5, 10), TimeSlot::EightAm);

        let layout = calculate_layout(&state);

        let marked: Vec<_> = layout
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .filter(|c| c.has_events)
            .collect();

        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, date(2024, 5, 10));
    }

    #[test]
    fn leading_days_belong_to_the_previous_month() {
        let mut state = AppState::new();
        state.selected_date = date(2024, 5, 15);

        let layout = calculate_layout(&state);

        let leading: Vec<_> = layout.weeks[0]
            .days
            .iter()
            .filter(|c| !c.is_current_month)
            .collect();

        assert!(!leading.is_empty());
        assert!(leading.iter().all(|c| c.date.month() == 4));
    }
}
