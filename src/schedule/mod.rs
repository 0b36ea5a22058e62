pub mod event;
pub mod planner;
pub mod slot;
pub mod store;
pub mod upcoming;

pub use event::EventRecord;
pub use planner::Planner;
pub use slot::{clock_label_hour, TimeSlot};
pub use store::EventStore;
pub use upcoming::{UpcomingEvent, UpcomingList};
