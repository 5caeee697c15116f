//! The interactive game: configure, play the rounds, summarize, and save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use mentalmath_core::console::TerminalConsole;
use mentalmath_core::generator::ProblemGenerator;
use mentalmath_core::model::SessionConfig;
use mentalmath_core::prompts;
use mentalmath_core::session::run_session;
use mentalmath_core::statistics::SessionStats;
use mentalmath_core::traits::{Clock, Console, ProblemSource, SystemClock};
use mentalmath_report::{save_results, write_summary};

/// What a finished game produced.
#[derive(Debug)]
pub struct GameOutcome {
    pub stats: SessionStats,
    pub saved_to: Option<PathBuf>,
}

/// Play one game on the real terminal, saving into the current directory.
pub fn execute() -> Result<()> {
    let mut console = TerminalConsole::new();
    let mut problems = ProblemGenerator::from_entropy();
    let out_dir = std::env::current_dir().context("failed to resolve current directory")?;

    let outcome = play(&mut console, &mut problems, &SystemClock, &out_dir)?;
    tracing::debug!(
        asked = outcome.stats.asked,
        saved = outcome.saved_to.is_some(),
        "game finished"
    );
    Ok(())
}

/// Run the whole game against the given ports.
pub fn play<C, P, K>(
    console: &mut C,
    problems: &mut P,
    clock: &K,
    out_dir: &Path,
) -> Result<GameOutcome>
where
    C: Console + ?Sized,
    P: ProblemSource + ?Sized,
    K: Clock + ?Sized,
{
    prompts::print_intro(console)?;
    let difficulty = prompts::choose_difficulty(console)?;
    let rounds = prompts::choose_rounds(console)?;
    let config = SessionConfig { difficulty, rounds };

    let stats = run_session(console, problems, clock, config)?;

    let summary = write_summary(console, &stats)?;
    match summary.to_json() {
        Ok(json) => tracing::info!(summary = %json, "game over"),
        Err(e) => tracing::warn!("could not encode summary: {e:#}"),
    }

    let saved_to = if prompts::confirm_save(console)? {
        let path = save_results(out_dir, &stats, Utc::now())?;
        let shown = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        console.write_line(&format!("Saved to {shown}"))?;
        Some(path)
    } else {
        None
    };

    Ok(GameOutcome { stats, saved_to })
}
