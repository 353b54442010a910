//! UI Components
//!
//! Leptos components making up the counter card.

mod auto_increment_toggle;
mod count_display;
mod counter_controls;
mod preview_row;
mod step_input;

pub use auto_increment_toggle::AutoIncrementToggle;
pub use count_display::CountDisplay;
pub use counter_controls::CounterControls;
pub use preview_row::PreviewRow;
pub use step_input::StepInput;
