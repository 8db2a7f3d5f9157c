//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic product catalog library** with a terminal client on top.
//! The catalog logic knows nothing about terminals; the CLI is one front-end among
//! possible others.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the browse session, renders cards │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CatalogView: owns the catalog and the current criteria   │
//! │  - Applies actions, then recomputes explicitly              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic: visible list, criteria actions, lookups      │
//! │  - Returns CmdResult values, no I/O                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (catalog.rs, model.rs)                                │
//! │  - The fixed, read-only product collection                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Explicit State
//!
//! The visible list is a pure function of `(catalog, criteria)`. There are no observable
//! cells and nothing recomputes behind the caller's back: a front-end applies an action
//! through [`api::CatalogView::apply`] and receives the freshly computed list in the
//! returned [`api::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The `CatalogView` facade
//! - [`commands`]: Pipeline and action logic
//! - [`catalog`]: The product collection
//! - [`criteria`]: Search, category, price and sort controls
//! - [`model`]: `Product` and `Category`
//! - [`config`]: Presentation settings
//! - [`error`]: Error types
//! - `cli`: Argument parsing, browse session and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod model;
