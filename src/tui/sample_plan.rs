use chrono::{Local, NaiveTime};

use dayplan::schedule::{EventRecord, Planner, TimeSlot};

pub fn seed_sample_plan(planner: &mut Planner) {
    let today = Local::now().date_naive();

    let Some(tomorrow) = today.succ_opt() else { return };
    let Some(day_after) = tomorrow.succ_opt() else { return };

    let placements = [
        (today, TimeSlot::EightAm, "🍎", "Breakfast"),
        (today, TimeSlot::NineAm, "🎒", "School"),
        (today, TimeSlot::Noon, "🥪", "Lunch"),
        (today, TimeSlot::ThreePm, "📚", "Homework"),
        (today, TimeSlot::FivePm, "🍝", "Dinner"),
        (tomorrow, TimeSlot::EightAm, "🍎", "Breakfast"),
        (tomorrow, TimeSlot::TenAm, "🎹", "Piano"),
        (tomorrow, TimeSlot::FourPm, "⚽", "Practice"),
        (day_after, TimeSlot::ElevenAm, "📖", "Reading"),
        (day_after, TimeSlot::TwoPm, "🛁", "Bath"),
    ];

    for (date, slot, icon, title) in placements {
        planner.place(date.and_time(NaiveTime::MIN), slot, EventRecord::new(icon, title));
    }
}
