//! Application state module

mod app_state;
mod forms;
mod snackbar;

pub use app_state::*;
pub use forms::*;
pub use snackbar::*;
