//! # UI Module
//!
//! Terminal view components for the quickpick selection overlay.
//!
//! ## Components
//!
//! - [`SelectorWidget`] - the root popup: search box, clear control, child
//!   views, outside-click dismissal, the public selection event
//! - [`GroupView`] / [`ItemView`] - the view tree mirroring the entry tree
//! - [`mod@defer`] - explicit one-tick deferred actions (focus, arming)
//! - [`mod@dismiss`] - the outside-click dismissal watcher
//!
//! ## Layout
//!
//! ```text
//!         (host screen, clicks out here dismiss)
//!     ┌───────────────── Select ─────────────────┐
//!     │ > search query█                      [x] │
//!     │──────────────────────────────────────────│
//!     │ Apple                                [?] │
//!     │ Vegetables                               │
//!     │   Carrot                                 │
//!     │   Potato                             [?] │
//!     │                                          │
//!     │ footer / help flash                      │
//!     └──────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! Queries flow top-down (root forwards to every child), visibility flows
//! bottom-up (item match OR-aggregates into group visibility), and clicks
//! bubble bottom-up on a typed channel (item, through group relays, to the
//! root, which re-emits exactly one public selection and tears down).

pub mod config;
pub mod defer;
pub mod dismiss;
pub mod group;
pub mod item;
pub mod theme;
pub mod view;
pub mod widget;

pub use theme::Theme;
pub use widget::{SelectorWidget, WidgetEvent, WidgetState};
