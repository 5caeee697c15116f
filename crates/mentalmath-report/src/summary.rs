//! The summary block printed when a session ends.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mentalmath_core::statistics::SessionStats;
use mentalmath_core::traits::Console;

const HEADER_RULE: usize = 28;
const FOOTER_RULE: usize = 68;

/// Final figures for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub asked: u32,
    pub correct: u32,
    /// `100 * correct / asked`, or 0 when nothing was asked.
    pub accuracy_pct: f64,
    pub score: u64,
    /// `total_time / asked`, or 0 when nothing was asked.
    pub average_time_secs: f64,
    pub max_streak: u32,
}

impl SessionSummary {
    pub fn from_stats(stats: &SessionStats) -> Self {
        Self {
            asked: stats.asked,
            correct: stats.correct,
            accuracy_pct: stats.accuracy_percent(),
            score: stats.score,
            average_time_secs: stats.average_time_secs(),
            max_streak: stats.max_streak,
        }
    }

    /// The summary block, one entry per printed line.
    pub fn lines(&self) -> Vec<String> {
        let rule = "=".repeat(HEADER_RULE);
        vec![
            String::new(),
            format!("{rule} SUMMARY {rule}"),
            format!("Questions answered: {}", self.asked),
            format!("Correct answers:   {}", self.correct),
            format!("Accuracy:          {:.1}%", self.accuracy_pct),
            format!("Total score:       {}", self.score),
            format!("Average time/q:    {:.2}s", self.average_time_secs),
            format!("Best streak:       {}", self.max_streak),
            "=".repeat(FOOTER_RULE),
            "Thanks for playing! Share this repo and invite friends to compete.".to_string(),
            String::new(),
        ]
    }

    /// Serialize the summary as a single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize session summary")
    }
}

/// Print the summary for `stats` and return it.
pub fn write_summary<C: Console + ?Sized>(
    console: &mut C,
    stats: &SessionStats,
) -> Result<SessionSummary> {
    let summary = SessionSummary::from_stats(stats);
    for line in summary.lines() {
        console
            .write_line(&line)
            .context("failed to print session summary")?;
    }
    Ok(summary)
}
