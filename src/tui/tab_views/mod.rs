pub mod day;
pub mod events;
pub mod month;
pub mod palette;
pub mod settings;
pub mod week;
