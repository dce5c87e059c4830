//! Reusable UI Components
//!
//! Small building blocks shared by the contact form and the dialogs.
//!
//! ## Components
//!
//! - `InputField` - Labelled text input with caret, placeholder, and inline error
//! - `StatusIndicator` - Spinner, success, and error indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{
    calculate_dialog_width, calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
