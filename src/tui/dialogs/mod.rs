pub mod add_event;
pub mod help;
