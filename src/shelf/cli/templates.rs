//! Output templates, kept as standalone files under `templates/` and embedded at compile time.
//!
//! Layout (widths, padding, grid rows) is computed in `render.rs`; templates only decide
//! which pieces appear and which named style each one gets. Line breaks are explicit: a
//! template line that holds only block tags still emits its newline, so loops are written
//! on the same line as the content they repeat.

pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.tmp");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
