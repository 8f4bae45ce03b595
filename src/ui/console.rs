//! Interactive console loop
//!
//! Drives a [`GameSession`] from line-oriented input. Each round prints the
//! board and a status line, asks for the piece and then the destination, and
//! hands both answers to [`GameSession::step`]. The loop has no end condition
//! of its own; it stops when the input runs out.
//!
//! Generic over [`BufRead`] / [`Write`] so tests can script whole games with
//! an in-memory cursor.

use std::io::{self, BufRead, Write};

use board_engine::{GameSession, MoveOutcome, StepOutcome};
use tracing::{debug, info};

use super::render::{prompts, render_board, status_line};
use crate::core::GameSettings;

pub const ILLEGAL_MOVE: &str = "Illegal move! Try again.";
pub const INVALID_INPUT: &str = "Invalid input! Try again.";
pub const NOTHING_TO_UNDO: &str = "Nothing to undo.";

/// Read one line without its terminator; `None` at end of input
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Play `session` until `input` is exhausted
///
/// Returns the number of rounds in which both answers were read.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    settings: &GameSettings,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    info!("[CONSOLE] Starting {} console", session.variant());
    let mut rounds = 0;

    loop {
        write!(output, "{}", render_board(session.board(), settings))?;
        writeln!(output, "{}", status_line(session, settings))?;

        let (piece_prompt, target_prompt) = prompts(session.variant(), session.turn());
        let Some(start) = ask(input, output, &piece_prompt)? else {
            break;
        };
        let Some(end) = ask(input, output, &target_prompt)? else {
            break;
        };
        rounds += 1;

        match session.step(&start, &end) {
            StepOutcome::Moved {
                outcome: MoveOutcome::Rejected(_),
                ..
            } => writeln!(output, "{ILLEGAL_MOVE}")?,
            StepOutcome::Moved { .. } => {}
            StepOutcome::Undone { restored: false } => writeln!(output, "{NOTHING_TO_UNDO}")?,
            StepOutcome::Undone { restored: true } => {}
            StepOutcome::InvalidInput(e) => {
                debug!("[CONSOLE] Could not read {:?} / {:?}: {}", start, end, e);
                writeln!(output, "{INVALID_INPUT}")?;
            }
        }
    }

    writeln!(output)?;
    info!("[CONSOLE] Input closed after {} rounds", rounds);
    Ok(rounds)
}
