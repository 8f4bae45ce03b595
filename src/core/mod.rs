//! Core module - settings, persistence and error types for the front-end
//!
//! # Resources
//!
//! - [`GameSettings`] - User preferences (default game, empty-cell glyph,
//!   move-number display)
//! - [`settings_persistence`] - JSON load/save with fallback to defaults
//! - [`CoreError`] - Failures surfaced by persistence

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::GameSettings;
pub use settings_persistence::{load_settings, read_settings, save_settings, settings_path};
