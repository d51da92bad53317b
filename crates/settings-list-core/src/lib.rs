//! `settings-list-core` renders a sectioned settings screen from plain data.
//!
//! A screen is a [`model::ListModel`]: ordered sections of rows, where each row carries a
//! name, an optional icon and a [`model::RowVariant`] saying what kind of row it is (profile
//! header, switch, status informer, navigator, or a row with a status text or count badge). Adding
//! a row means adding data; no rendering code changes.
//!
//! ## Pieces
//!
//! - [`row::Renderers`]: one renderer per row kind, turning a row into a [`row::RenderedRow`]
//!   placed with the shared [`layout::LayoutTemplate`].
//! - [`controller::ListController`]: section/row counts, per-row rendering and activation
//!   callbacks, all derived from the model.
//! - [`view::SettingsView`]: the interactive screen (large title, search bar, virtualized
//!   grouped list) driven by [`input::InputEvent`]s.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input and rendering from your app.
//! - No async runtime: callbacks run synchronously on the caller's thread.
//! - Backend-agnostic input; enable the `crossterm` feature for event conversion.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod error;
pub mod icon;
pub mod layout;
pub mod model;
pub mod render;
pub mod row;
pub mod viewport;

pub mod bindings;
pub mod controller;
pub mod help;
pub mod input;
pub mod keymap;
pub mod nav_bar;
pub mod search;
pub mod view;
