use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::schedule::{EventRecord, Planner, TimeSlot};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Day,
    Week,
    Month,
    Events,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Day, Tab::Week, Tab::Month, Tab::Events, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Day => "Day",
            Tab::Week => "Week",
            Tab::Month => "Month",
            Tab::Events => "Events",
            Tab::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub icon: &'static str,
    pub title: &'static str,
}

pub const PALETTE: [PaletteItem; 10] = [
    PaletteItem { icon: "🍎", title: "Breakfast" },
    PaletteItem { icon: "🎒", title: "School" },
    PaletteItem { icon: "🥪", title: "Lunch" },
    PaletteItem { icon: "📚", title: "Homework" },
    PaletteItem { icon: "⚽", title: "Practice" },
    PaletteItem { icon: "🎹", title: "Piano" },
    PaletteItem { icon: "🍝", title: "Dinner" },
    PaletteItem { icon: "🛁", title: "Bath" },
    PaletteItem { icon: "📖", title: "Reading" },
    PaletteItem { icon: "🛏", title: "Bedtime" },
];

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    SlotTaken,
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddForm {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub icon_index: usize,
    pub title: String,
    pub active_field: FormField,
}

impl AddForm {
    pub fn new(date: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            date,
            slot,
            icon_index: 0,
            title: String::new(),
            active_field: FormField::Icon,
        }
    }

    pub fn icon(&self) -> &'static str {
        PALETTE[self.icon_index].icon
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Icon => FormField::Title,
            FormField::Title => FormField::Slot,
            FormField::Slot => FormField::Icon,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Icon => FormField::Slot,
            FormField::Title => FormField::Icon,
            FormField::Slot => FormField::Title,
        };
    }

    pub fn next_icon(&mut self) {
        self.icon_index = (self.icon_index + 1) % PALETTE.len();
    }

    pub fn prev_icon(&mut self) {
        self.icon_index = (self.icon_index + PALETTE.len() - 1) % PALETTE.len();
    }

    pub fn next_slot(&mut self) {
        self.slot = self.slot.next();
    }

    pub fn prev_slot(&mut self) {
        self.slot = self.slot.prev();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Icon,
    Title,
    Slot,
}

pub struct AppState {
    pub mode: Mode,
    pub tab: Tab,
    pub selected_date: NaiveDate,
    pub selected_slot: TimeSlot,
    pub planner: Planner,
    pub command_buffer: String,
    pub theme: Theme,
    pub add_form: Option<AddForm>,
    pub armed: Option<usize>,
    pub notice: Option<Notice>,
    pub events_scroll: usize,
    pub settings_index: usize,
    pub show_help: bool,
    pub help_scroll: usize,
    pub show_clock: bool,
    pub clock: NaiveDateTime,
}

impl AppState {
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            mode: Mode::Normal,
            tab: Tab::Day,
            selected_date: now.date_naive(),
            selected_slot: TimeSlot::EightAm,
            planner: Planner::new(),
            command_buffer: String::new(),
            theme: Theme::default(),
            add_form: None,
            armed: None,
            notice: None,
            events_scroll: 0,
            settings_index: 0,
            show_help: false,
            help_scroll: 0,
            show_clock: true,
            clock: now.naive_local(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_clock(mut self, show_clock: bool) -> Self {
        self.show_clock = show_clock;
        self
    }

    pub fn arm(&mut self, index: usize) {
        if index < PALETTE.len() {
            self.armed = Some(index);
        }
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn armed_item(&self) -> Option<PaletteItem> {
        self.armed.and_then(|index| PALETTE.get(index).copied())
    }

    pub fn place_armed(&mut self) -> Option<PlaceOutcome> {
        let item = self.armed_item()?;
        Some(self.place_at(self.selected_date, self.selected_slot, item.icon, item.title))
    }

    pub fn open_form(&mut self) {
        self.add_form = Some(AddForm::new(self.selected_date, self.selected_slot));
    }

    pub fn cancel_form(&mut self) {
        self.add_form = None;
    }

    pub fn submit_form(&mut self) -> Option<PlaceOutcome> {
        let form = self.add_form.as_ref()?;
        let date = form.date;
        let slot = form.slot;
        let icon = form.icon();
        let title = form.title.clone();

        let outcome = self.place_at(date, slot, icon, &title);
        if outcome == PlaceOutcome::Placed {
            self.add_form = None;
        }
        Some(outcome)
    }

    fn place_at(&mut self, date: NaiveDate, slot: TimeSlot, icon: &str, title: &str) -> PlaceOutcome {
        let title = title.trim();
        if title.is_empty() {
            self.notice = Some(Notice::Error("event needs a title".to_string()));
            return PlaceOutcome::EmptyTitle;
        }

        let at = date.and_time(NaiveTime::MIN);
        if !self.planner.place(at, slot, EventRecord::new(icon, title)) {
            self.notice = Some(Notice::Error(format!(
                "{} on {} is already taken",
                slot,
                date.format("%a %b %-d")
            )));
            return PlaceOutcome::SlotTaken;
        }

        info!("placed {} {} at {} on {}", icon, title, slot, date);
        self.notice = Some(Notice::Info(format!(
            "{} {} placed at {} on {}",
            icon,
            title,
            slot,
            date.format("%a %b %-d")
        )));
        PlaceOutcome::Placed
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn move_events_scroll_down(&mut self) {
        let event_count = self.planner.upcoming_events().len();
        if event_count > 0 && self.events_scroll < event_count - 1 {
            self.events_scroll += 1;
        }
    }

    pub fn move_events_scroll_up(&mut self) {
        if self.events_scroll > 0 {
            self.events_scroll -= 1;
        }
    }

    pub fn move_settings_down(&mut self) {
        let theme_count = Theme::available_themes().len();
        if theme_count > 0 && self.settings_index < theme_count - 1 {
            self.settings_index += 1;
        }
    }

    pub fn move_settings_up(&mut self) {
        if self.settings_index > 0 {
            self.settings_index -= 1;
        }
    }

    pub fn selected_theme_name(&self) -> Option<&'static str> {
        Theme::available_themes().get(self.settings_index).copied()
    }

    pub fn apply_selected_theme(&mut self) {
        if let Some(name) = self.selected_theme_name() {
            self.theme = Theme::get_by_name(name);
        }
    }

    pub fn tick_clock(&mut self) {
        self.clock = Local::now().naive_local();
    }

    pub fn clock_label(&self) -> String {
        self.clock.format("%-I:%M %p").to_string()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
