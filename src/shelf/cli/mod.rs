//! Terminal front-end for the shelf library.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `session`: the line-driven `browse` loop
//! - `render`, `templates`, `styles`, `theme`: templated, themed output

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
