//! Port traits between the game logic and the outside world.
//!
//! The session runner only talks to a [`Console`] for input and output, a
//! [`Clock`] for response timing, and a [`ProblemSource`] for questions, so
//! every piece can be swapped for a scripted double in tests.

use std::cell::Cell;
use std::io;
use std::time::{Duration, Instant};

use crate::model::{Difficulty, Problem};

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Line-oriented interactive input and output.
pub trait Console {
    /// Print one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` without a trailing newline and read one line of input.
    ///
    /// The returned line has its line terminator removed. `Ok(None)` means
    /// the input stream is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Monotonic time source used to measure response times.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that advances by a fixed step on every reading.
///
/// Two consecutive readings are exactly `step` apart, which makes the
/// elapsed time of every answered round equal to `step`.
#[derive(Debug)]
pub struct SteppingClock {
    current: Cell<Instant>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Cell::new(Instant::now()),
            step,
        }
    }

    /// Convenience constructor taking the step in seconds.
    pub fn from_secs_f64(step_secs: f64) -> Self {
        Self::new(Duration::from_secs_f64(step_secs))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

// ---------------------------------------------------------------------------
// Problem source
// ---------------------------------------------------------------------------

/// Anything that can hand out the next problem for a difficulty tier.
pub trait ProblemSource {
    fn next_problem(&mut self, difficulty: Difficulty) -> Problem;
}
