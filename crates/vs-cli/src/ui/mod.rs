//! # CLI UI Module
//!
//! Styling and formatting for `vs` output. Colors follow `--color` and
//! `NO_COLOR`; every listing command also has a `--json` form for scripts.
//!
//! ## Module Structure
//!
//! - `color`: color mode detection and terminal width
//! - `style`: message types, prefixes, and styling functions
//! - `format`: small text helpers
//! - `table`: comfy-table rendering for config and todo summaries
//! - `page`: standalone HTML page for `vs todos --html`

pub mod color;
pub mod format;
pub mod page;
pub mod style;
pub mod table;

pub use color::ColorMode;
pub use style::{MessageType, Style};
