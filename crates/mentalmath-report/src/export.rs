//! Plain-text results file written when the player asks to save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use mentalmath_core::statistics::SessionStats;

pub const RESULTS_TITLE: &str = "Mental Math Trainer Results";

/// `mental_math_results_<unix-timestamp>.txt`
pub fn results_filename(at: DateTime<Utc>) -> String {
    format!("mental_math_results_{}.txt", at.timestamp())
}

/// File contents: title, then asked, correct, score, and best streak.
pub fn render_results(stats: &SessionStats) -> String {
    format!(
        "{RESULTS_TITLE}\nAsked: {}\nCorrect: {}\nScore: {}\nBest streak: {}\n",
        stats.asked, stats.correct, stats.score, stats.max_streak
    )
}

/// Write the results file into `dir` and return its path.
pub fn save_results(dir: &Path, stats: &SessionStats, at: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(results_filename(at));
    std::fs::write(&path, render_results(stats))
        .with_context(|| format!("failed to write results to {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved session results");
    Ok(path)
}
