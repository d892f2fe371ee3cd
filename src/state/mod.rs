//! Application state module

mod app_state;
mod forms;
mod tracking;

pub use app_state::*;
pub use forms::*;
pub use tracking::*;
