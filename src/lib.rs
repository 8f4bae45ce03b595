//! # Board Games
//!
//! Console front-end over [`board_engine`]: a game menu, text rendering of
//! the three boards, the interactive move loop and persisted user settings.
//!
//! - [`core`] - settings, their JSON persistence and error types
//! - [`ui`] - menu, renderer and console loop, generic over reader/writer

pub mod core;
pub mod ui;
