use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    pub starts_at: NaiveDateTime,
    pub icon: String,
    pub title: String,
}

impl UpcomingEvent {
    pub fn new(starts_at: NaiveDateTime, icon: &str, title: &str) -> Self {
        Self {
            starts_at,
            icon: icon.to_string(),
            title: title.to_string(),
        }
    }

    pub fn display_line(&self) -> String {
        format!(
            "{} {} {}",
            self.starts_at.format("%a %b %-d, %-I:%M %P"),
            self.icon,
            self.title
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpcomingList {
    events: Vec<UpcomingEvent>,
}

impl UpcomingList {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn record(&mut self, starts_at: NaiveDateTime, icon: &str, title: &str) {
        self.events.push(UpcomingEvent::new(starts_at, icon, title));
        // Stable sort: events at the same instant stay in recording order.
        self.events.sort_by_key(|event| event.starts_at);
    }

    pub fn events(&self) -> &[UpcomingEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn record_appends_a_single_event() {
        let mut list = UpcomingList::new();
        list.record(at(2024, 1, 10, 8), "🍎", "Breakfast");

        assert_eq!(list.len(), 1);
        assert_eq!(list.events()[0].title, "Breakfast");
    }

    #[test]
    fn events_are_sorted_ascending_by_start() {
        let mut list = UpcomingList::new();
        list.record(at(2024, 3, 5, 14), "📚", "Study");
        list.record(at(2024, 1, 10, 8), "🍎", "Breakfast");
        list.record(at(2024, 2, 1, 9), "🎒", "School");

        let titles: Vec<&str> = list.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Breakfast", "School", "Study"]);
    }

    #[test]
    fn same_instant_events_keep_recording_order() {
        let mut list = UpcomingList::new();
        list.record(at(2024, 1, 10, 8), "🍎", "First");
        list.record(at(2024, 1, 10, 8), "🎒", "Second");
        list.record(at(2024, 1, 10, 8), "📚", "Third");

        let titles: Vec<&str> = list.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn earlier_hour_on_the_same_day_sorts_first() {
        let mut list = UpcomingList::new();
        list.record(at(2024, 1, 10, 17), "🛏", "Wind down");
        list.record(at(2024, 1, 10, 8), "🍎", "Breakfast");

        assert_eq!(list.events()[0].title, "Breakfast");
        assert_eq!(list.events()[1].title, "Wind down");
    }

    #[test]
    fn display_line_shows_date_time_icon_and_title() {
        let event = UpcomingEvent::new(at(2024, 1, 10, 8), "🍎", "Breakfast");
        assert_eq!(event.display_line(), "Wed Jan 10, 8:00 am 🍎 Breakfast");
    }

    proptest! {
        #[test]
        fn list_is_always_sorted_after_any_recording_order(hours in prop::collection::vec(0u32..24, 1..12)) {
            let mut list = UpcomingList::new();
            for (index, hour) in hours.iter().enumerate() {
                let day = 1 + (index as u32 % 28);
                list.record(at(2024, 1, day, *hour), "📌", "Entry");
            }

            for pair in list.events().windows(2) {
                prop_assert!(pair[0].starts_at <= pair[1].starts_at);
            }
        }
    }
}
