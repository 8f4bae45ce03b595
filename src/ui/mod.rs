//! Text front-end: game menu, board rendering and the console loop

pub mod console;
pub mod menu;
pub mod render;

pub use console::{read_line, run_session};
pub use menu::{run_menu, select_variant};
pub use render::{render_board, status_line};
