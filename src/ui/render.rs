//! Text rendering of boards and status lines
//!
//! Every variant is drawn as a grid of glyphs between a file-letter header and
//! footer, with rank labels on both sides of each row:
//!
//! ```text
//!   A B C D E F G H
//!   ----------------
//! 8 r n b q k b n r 8
//! ...
//! 1 R N B Q K B N R 1
//!   ----------------
//!   A B C D E F G H
//! ```
//!
//! Hex-chess uses two-character rank labels and letters `A..K`; checkers
//! drops the dashed rules.

use board_engine::{Board, Color, GameSession, Variant};

use crate::core::GameSettings;

/// Coordinate frame drawn around one variant's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardFrame {
    files: &'static str,
    rule: Option<&'static str>,
    label_width: usize,
}

fn frame(variant: Variant) -> BoardFrame {
    match variant {
        Variant::Chess => BoardFrame {
            files: "  A B C D E F G H",
            rule: Some("  ----------------"),
            label_width: 1,
        },
        Variant::HexChess => BoardFrame {
            files: "    A B C D E F G H I J K",
            rule: None,
            label_width: 2,
        },
        Variant::Checkers => BoardFrame {
            files: "  A B C D E F G H",
            rule: None,
            label_width: 1,
        },
    }
}

/// Draw `board` with its coordinate frame, one line per text row
pub fn render_board(board: &Board, settings: &GameSettings) -> String {
    let frame = frame(board.variant());
    let rows = board.display();
    let size = rows.len();
    let mut lines = Vec::with_capacity(size + 4);

    lines.push(frame.files.to_string());
    lines.extend(frame.rule.map(str::to_string));

    for (i, row) in rows.iter().enumerate() {
        let label = format!("{:>width$}", size - i, width = frame.label_width);
        let mut line = format!("{label} ");
        for cell in row {
            line.push(cell.unwrap_or(settings.empty_marker));
            line.push(' ');
        }
        line.push_str(&label);
        lines.push(line);
    }

    lines.extend(frame.rule.map(str::to_string));
    lines.push(frame.files.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// `"white"` → `"White"`
pub fn capitalized(color: Color) -> String {
    let name = color.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whose turn it is, with the move number where the variant tracks one
pub fn status_line(session: &GameSession, settings: &GameSettings) -> String {
    if session.variant().counts_moves() && settings.show_move_number {
        format!("Move {}, {} to move", session.move_count() + 1, session.turn())
    } else {
        format!("{} to move", capitalized(session.turn()))
    }
}

/// The two input prompts for the side to move: piece first, then destination
pub fn prompts(variant: Variant, turn: Color) -> (String, String) {
    let player = capitalized(turn);
    match variant {
        Variant::Chess => (
            format!("{player}, choose a piece (e.g. E2): "),
            format!("{player}, enter the target square (e.g. E4): "),
        ),
        Variant::HexChess => (
            format!("{player}, choose a piece (e.g. E5): "),
            format!("{player}, enter the target square (e.g. E7): "),
        ),
        Variant::Checkers => (
            "Choose a checker (e.g. E3): ".to_string(),
            "Enter the target square (e.g. F4): ".to_string(),
        ),
    }
}
