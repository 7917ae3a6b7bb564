//! Application state module

mod app_state;
mod catalog;
mod forms;
mod hero_state;
mod lead_form;

pub use app_state::*;
pub use catalog::*;
pub use forms::*;
pub use hero_state::*;
pub use lead_form::*;
