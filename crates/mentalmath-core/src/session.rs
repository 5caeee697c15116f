//! The round loop of a practice session.
//!
//! Each round moves through prompt, awaiting input, and scored. Typing
//! `quit` (or closing the input) moves to the terminal quit state and ends
//! the session before the remaining rounds are played.

use std::num::IntErrorKind;

use crate::error::GameError;
use crate::model::{Problem, SessionConfig};
use crate::prompts::RULE_WIDTH;
use crate::scoring::ScoreBreakdown;
use crate::statistics::SessionStats;
use crate::traits::{Clock, Console, ProblemSource};

pub const ANSWER_PROMPT: &str = "Your answer: ";

/// What happened in a single round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    /// The answer was right.
    Correct {
        points: u32,
        elapsed_secs: f64,
        streak: u32,
    },
    /// A number was given but it was wrong.
    Wrong { answer: i64, elapsed_secs: f64 },
    /// The input was not a number.
    Invalid,
    /// The player asked to stop.
    Quit,
}

/// How an answer line was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAnswer {
    /// An integer that fits in an `i64`.
    Number(i64),
    /// A well-formed integer too large to be any problem's answer.
    OutOfRange,
    /// Anything else.
    NotANumber,
}

/// Read a trimmed answer line as an integer.
///
/// Accepts an optional sign and single `_` separators between digits, so
/// `1_000` is a thousand. Integers beyond `i64` are still numbers: they are
/// scored as wrong rather than rejected as invalid input.
pub fn parse_answer(input: &str) -> ParsedAnswer {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return ParsedAnswer::NotANumber;
    }

    let cleaned: String = input.chars().filter(|&c| c != '_').collect();
    match cleaned.parse::<i64>() {
        Ok(n) => ParsedAnswer::Number(n),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            ParsedAnswer::OutOfRange
        }
        Err(_) => ParsedAnswer::NotANumber,
    }
}

impl RoundOutcome {
    pub fn is_quit(&self) -> bool {
        matches!(self, RoundOutcome::Quit)
    }
}

/// Drives the rounds of one session and accumulates its statistics.
pub struct SessionRunner<'a, C: ?Sized, P: ?Sized, K: ?Sized> {
    console: &'a mut C,
    problems: &'a mut P,
    clock: &'a K,
    config: SessionConfig,
    stats: SessionStats,
}

impl<'a, C, P, K> SessionRunner<'a, C, P, K>
where
    C: Console + ?Sized,
    P: ProblemSource + ?Sized,
    K: Clock + ?Sized,
{
    pub fn new(
        console: &'a mut C,
        problems: &'a mut P,
        clock: &'a K,
        config: SessionConfig,
    ) -> Self {
        Self {
            console,
            problems,
            clock,
            config,
            stats: SessionStats::new(),
        }
    }

    /// Statistics so far.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Play every round, stopping early on quit, and return the final stats.
    pub fn run(mut self) -> Result<SessionStats, GameError> {
        let SessionConfig { difficulty, rounds } = self.config;
        tracing::info!(%difficulty, rounds, "session started");

        self.console.write_line("")?;
        self.console.write_line(&format!(
            "Starting {rounds} rounds on {difficulty} difficulty. Good luck!"
        ))?;
        self.console.write_line("Answer quickly for time bonuses. Type 'quit' to finish early.")?;
        self.console.write_line(&"-".repeat(RULE_WIDTH))?;

        for round in 1..=rounds {
            let outcome = self.play_round(round)?;
            tracing::debug!(round, ?outcome, "round finished");
            if outcome.is_quit() {
                break;
            }
        }

        tracing::info!(
            asked = self.stats.asked,
            correct = self.stats.correct,
            score = self.stats.score,
            "session finished"
        );
        Ok(self.stats)
    }

    /// Play one round numbered `round` (1-based).
    pub fn play_round(&mut self, round: u32) -> Result<RoundOutcome, GameError> {
        let problem = self.problems.next_problem(self.config.difficulty);
        self.stats.record_asked();
        self.console.write_line(&format!("Q{round}: {problem} = ?"))?;

        let start = self.clock.now();
        let Some(line) = self.console.read_line(ANSWER_PROMPT)? else {
            self.console.write_line("Quitting early...")?;
            return Ok(RoundOutcome::Quit);
        };
        let input = line.trim();

        if input.eq_ignore_ascii_case("quit") {
            self.console.write_line("Quitting early...")?;
            return Ok(RoundOutcome::Quit);
        }

        let guess = match parse_answer(input) {
            ParsedAnswer::Number(n) => Some(n),
            ParsedAnswer::OutOfRange => {
                tracing::debug!(input, "answer outside i64, scoring as wrong");
                None
            }
            ParsedAnswer::NotANumber => {
                self.console.write_line("Invalid input - counted as incorrect.")?;
                self.stats.record_invalid();
                return Ok(RoundOutcome::Invalid);
            }
        };

        let elapsed_secs = self.clock.now().duration_since(start).as_secs_f64();
        let outcome = self.score_answer(&problem, guess, elapsed_secs)?;
        self.console.write_line(&"-".repeat(RULE_WIDTH))?;
        Ok(outcome)
    }

    /// Score a numeric answer. `None` is a number too large to be correct.
    fn score_answer(
        &mut self,
        problem: &Problem,
        guess: Option<i64>,
        elapsed_secs: f64,
    ) -> Result<RoundOutcome, GameError> {
        if guess.is_some_and(|g| problem.is_correct(g)) {
            let streak = self.stats.record_correct(elapsed_secs);
            let points = ScoreBreakdown::compute(
                self.config.difficulty.base_points(),
                true,
                elapsed_secs,
                streak,
            )
            .total;
            self.stats.add_points(points);
            self.console.write_line(&format!(
                "Correct! (+{points} pts)  Time: {elapsed_secs:.2}s  Streak: {streak}"
            ))?;
            Ok(RoundOutcome::Correct {
                points,
                elapsed_secs,
                streak,
            })
        } else {
            self.stats.record_wrong(elapsed_secs);
            self.console.write_line(&format!(
                "Wrong. Correct answer was {}.  Time: {elapsed_secs:.2}s",
                problem.answer
            ))?;
            Ok(RoundOutcome::Wrong {
                answer: problem.answer,
                elapsed_secs,
            })
        }
    }
}

/// Run a whole session. Shorthand for [`SessionRunner::run`].
pub fn run_session<C, P, K>(
    console: &mut C,
    problems: &mut P,
    clock: &K,
    config: SessionConfig,
) -> Result<SessionStats, GameError>
where
    C: Console + ?Sized,
    P: ProblemSource + ?Sized,
    K: Clock + ?Sized,
{
    SessionRunner::new(console, problems, clock, config).run()
}
