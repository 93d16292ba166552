//! Login screen widgets.
//!
//! Only `toaster` reads shared state from context; `background` and
//! `input_field` take everything they need as props.

pub mod background;
pub mod input_field;
pub mod toaster;
