//! # bmicalc-tui
//!
//! Interactive BMI form using ratatui with Elm architecture.

pub mod footer;
pub mod form;
pub mod header;
pub mod info;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod result_card;
pub mod styles;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{Focus, TuiApp};
