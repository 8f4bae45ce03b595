//! Game selection menu

use std::io::{self, BufRead, Write};

use board_engine::Variant;
use tracing::info;

use super::console::read_line;

/// Printed when the menu answer names no game
pub const INVALID_CHOICE: &str = "Invalid choice. Exiting.";

/// Menu heading and one numbered line per game
pub fn menu_text() -> String {
    let mut text = String::from("Choose a game:\n");
    for (number, variant) in Variant::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", number + 1, variant.title()));
    }
    text
}

/// Interpret a menu answer: a game number or a game name
pub fn select_variant(answer: &str) -> Option<Variant> {
    answer.parse().ok()
}

/// Show the menu and read one answer
///
/// Returns `None` if the answer is not a game (after telling the player so) or
/// if the input ended before an answer arrived.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Variant>> {
    write!(output, "{}", menu_text())?;
    write!(output, "Enter game number: ")?;
    output.flush()?;

    let Some(answer) = read_line(input)? else {
        return Ok(None);
    };

    match select_variant(&answer) {
        Some(variant) => {
            info!("[CONSOLE] Menu selected {}", variant);
            Ok(Some(variant))
        }
        None => {
            writeln!(output, "{INVALID_CHOICE}")?;
            Ok(None)
        }
    }
}
