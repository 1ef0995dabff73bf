//! Presentation layer.
//!
//! Renders the roster via the selector and turns user input into
//! mutation requests:
//! - `render`: list and JSON output
//! - `form`: new-player form and its validation
//! - `terminal`: interactive command loop

pub mod form;
pub mod render;
pub mod terminal;

pub use form::{PlayerForm, NAME_LABEL, NUMBER_LABEL, SUBMIT_LABEL};
pub use render::{player_lines, render_json, render_roster, HEADING};
pub use terminal::{Command, Session, PROMPT};
