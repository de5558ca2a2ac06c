//! Quickpick - a searchable selection overlay for the terminal
//!
//! This library provides the data model and view components for a
//! mouse-driven, searchable list-selection popup: entries (items, optionally
//! bundled into labeled groups) are rendered as a centered overlay, filtered
//! live as the user types, and the clicked item is emitted as a single
//! selection event before the widget tears itself down.

pub mod entry;
pub mod ui;
