//! `settings-list` is a data-driven, sectioned settings screen for ratatui.
//!
//! The widgets live in `settings-list-core` and are re-exported here; this crate adds
//! [`config::ScreenConfig`], which loads a screen's rows from JSON, and a bundled screen via
//! [`config::ScreenConfig::builtin`].
//!
//! ```no_run
//! use settings_list::config::ScreenConfig;
//! use settings_list::controller::ListController;
//! use settings_list::model::Activation;
//! use settings_list::view::SettingsView;
//! use std::sync::Arc;
//!
//! let config = ScreenConfig::builtin()?;
//! let title = config.title.clone();
//! let search = config.search_options();
//! let model = config.into_model(|label: &str| -> Activation {
//!     let label = label.to_string();
//!     Arc::new(move || tracing::info!(%label, "row activated"))
//! })?;
//! let controller = ListController::new(model);
//! let view = SettingsView::with_options(title, Default::default(), search);
//! # let _ = (controller, view);
//! # Ok::<(), settings_list::config::ConfigError>(())
//! ```
pub use settings_list_core::bindings;
pub use settings_list_core::controller;
pub use settings_list_core::error;
pub use settings_list_core::help;
pub use settings_list_core::icon;
pub use settings_list_core::input;
pub use settings_list_core::keymap;
pub use settings_list_core::layout;
pub use settings_list_core::model;
pub use settings_list_core::nav_bar;
pub use settings_list_core::render;
pub use settings_list_core::row;
pub use settings_list_core::search;
pub use settings_list_core::theme;
pub use settings_list_core::view;
pub use settings_list_core::viewport;

#[cfg(feature = "crossterm")]
pub use settings_list_core::crossterm_input;

pub mod config;
