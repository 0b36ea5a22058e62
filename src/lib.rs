pub mod schedule;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use schedule::{EventRecord, EventStore, Planner, TimeSlot, UpcomingEvent};
pub use app::{AppState, Mode, PlaceOutcome, Tab};

pub use input::{command_mode, normal_mode};
