mod session;
mod presentation;
pub(crate) mod sample_plan;
mod tab_views;
mod dialogs;

pub use session::run_tui;
