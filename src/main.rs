//! `boardgames` binary: pick a game, then play it on the console
//!
//! Logs go to stderr (filter with `RUST_LOG`, default `warn`) so they never
//! interleave with the board on stdout.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use board_engine::{GameSession, Variant};
use boardgames::core::{load_settings, save_settings, settings_path};
use boardgames::ui::{run_menu, run_session};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chess, hexagonal chess and checkers on the console
#[derive(Parser, Debug)]
#[command(name = "boardgames", version, about)]
struct Cli {
    /// Game to start without showing the menu (1/2/3, chess, hex, checkers)
    #[arg(long)]
    variant: Option<Variant>,

    /// Settings file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Store the chosen game as the default for later runs
    #[arg(long)]
    remember: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.settings.unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let chosen = match cli.variant.or(settings.default_variant) {
        Some(variant) => Some(variant),
        None => run_menu(&mut input, &mut output).context("failed to run the game menu")?,
    };
    let Some(variant) = chosen else {
        return Ok(());
    };

    if cli.remember && settings.default_variant != Some(variant) {
        settings.default_variant = Some(variant);
        save_settings(&path, &settings)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    info!("[CONSOLE] Playing {}", variant);
    let mut session = GameSession::new(variant);
    run_session(&mut session, &settings, &mut input, &mut output)
        .context("console session failed")?;
    Ok(())
}
