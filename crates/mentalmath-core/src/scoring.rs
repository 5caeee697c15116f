//! Points for a single answered question.
//!
//! A correct answer earns the tier's base points plus a time bonus for fast
//! answers and a small bonus for keeping a streak going. Wrong answers earn
//! nothing.

use serde::{Deserialize, Serialize};

/// Answers faster than this many seconds earn a time bonus.
pub const TIME_BONUS_CEILING_SECS: f64 = 5.0;

/// Upper bound on the streak bonus.
pub const MAX_STREAK_BONUS: u32 = 5;

/// Per-component score for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub streak_bonus: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Score one question.
    ///
    /// `streak` is the streak count *including* this answer when it is
    /// correct.
    pub fn compute(base_points: u32, correct: bool, elapsed_secs: f64, streak: u32) -> Self {
        if !correct {
            return Self::default();
        }

        let time_bonus = time_bonus(elapsed_secs);
        let streak_bonus = streak_bonus(streak);
        Self {
            base: base_points,
            time_bonus,
            streak_bonus,
            total: base_points + time_bonus + streak_bonus,
        }
    }
}

/// Total points for one question. See [`ScoreBreakdown::compute`].
pub fn compute_score(base_points: u32, correct: bool, elapsed_secs: f64, streak: u32) -> u32 {
    ScoreBreakdown::compute(base_points, correct, elapsed_secs, streak).total
}

/// `floor(5 - elapsed)`, never below zero.
///
/// Negative or non-finite elapsed times are treated as zero seconds, which
/// caps the bonus at 5.
pub fn time_bonus(elapsed_secs: f64) -> u32 {
    if elapsed_secs >= TIME_BONUS_CEILING_SECS {
        return 0;
    }
    // NaN fails every comparison, so `max` picks 0.0 for it as well.
    let elapsed = elapsed_secs.max(0.0);
    (TIME_BONUS_CEILING_SECS - elapsed).floor() as u32
}

/// `min(5, floor(streak / 2))`.
pub fn streak_bonus(streak: u32) -> u32 {
    (streak / 2).min(MAX_STREAK_BONUS)
}
