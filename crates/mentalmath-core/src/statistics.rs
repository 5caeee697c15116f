//! Running statistics for one session.

use serde::{Deserialize, Serialize};

/// Counters accumulated over a session.
///
/// `asked` counts every problem shown, including the round the player quit
/// on and rounds answered with unparseable input. `total_time_secs` only
/// accumulates for rounds with a numeric answer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Problems shown.
    pub asked: u32,
    /// Problems answered correctly.
    pub correct: u32,
    /// Seconds spent on numerically answered problems.
    pub total_time_secs: f64,
    /// Accumulated points.
    pub score: u64,
    /// Current run of consecutive correct answers.
    pub streak: u32,
    /// Longest run of consecutive correct answers.
    pub max_streak: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a problem as shown.
    pub fn record_asked(&mut self) {
        self.asked += 1;
    }

    /// Record a correct answer and return the streak including it.
    pub fn record_correct(&mut self, elapsed_secs: f64) -> u32 {
        self.total_time_secs += elapsed_secs;
        self.correct += 1;
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);
        self.streak
    }

    /// Add points earned for the latest answer.
    pub fn add_points(&mut self, points: u32) {
        self.score += u64::from(points);
    }

    /// Record a numeric but wrong answer.
    pub fn record_wrong(&mut self, elapsed_secs: f64) {
        self.total_time_secs += elapsed_secs;
        self.streak = 0;
    }

    /// Record input that was not a number. No time is accumulated.
    pub fn record_invalid(&mut self) {
        self.streak = 0;
        self.max_streak = self.max_streak.max(self.streak);
    }

    /// Percentage of asked problems answered correctly, 0 when none were asked.
    pub fn accuracy_percent(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.asked) * 100.0
        }
    }

    /// Mean seconds per asked problem, 0 when none were asked.
    pub fn average_time_secs(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.total_time_secs / f64::from(self.asked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let stats = SessionStats::new();
        assert_eq!(stats, SessionStats::default());
        assert_eq!(stats.accuracy_percent(), 0.0);
        assert_eq!(stats.average_time_secs(), 0.0);
    }

    #[test]
    fn streak_tracks_high_water_mark() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.record_correct(1.0), 1);
        assert_eq!(stats.record_correct(1.0), 2);
        assert_eq!(stats.record_correct(1.0), 3);
        stats.record_wrong(2.0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.record_correct(1.0), 1);
        stats.record_invalid();
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.correct, 4);
    }

    #[test]
    fn invalid_input_adds_no_time() {
        let mut stats = SessionStats::new();
        stats.record_asked();
        stats.record_invalid();
        assert_eq!(stats.total_time_secs, 0.0);
        assert_eq!(stats.asked, 1);
    }

    #[test]
    fn derived_metrics() {
        let mut stats = SessionStats::new();
        for _ in 0..4 {
            stats.record_asked();
        }
        stats.record_correct(1.0);
        stats.record_correct(2.0);
        stats.record_correct(3.0);
        stats.record_wrong(2.0);
        assert!((stats.accuracy_percent() - 75.0).abs() < 1e-9);
        assert!((stats.average_time_secs() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn points_accumulate() {
        let mut stats = SessionStats::new();
        stats.add_points(15);
        stats.add_points(22);
        assert_eq!(stats.score, 37);
    }
}
