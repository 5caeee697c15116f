//! Core data model types for mentalmath.
//!
//! These are the types the whole game passes around: difficulty tiers,
//! arithmetic operators, generated problems, and session configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Number of rounds played when the user accepts the default.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Named difficulty tier.
///
/// Selects the operand ranges and operator set used by the generator, and
/// the base point value awarded for a correct answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Points awarded for a correct answer before any bonus.
    pub fn base_points(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Operators the generator may pick from at this tier.
    pub fn operators(self) -> &'static [Operator] {
        match self {
            Difficulty::Easy => &[Operator::Add, Operator::Subtract],
            Difficulty::Medium => &[Operator::Add, Operator::Subtract, Operator::Multiply],
            Difficulty::Hard => &[
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide,
            ],
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol used in question text.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator. Division is integer division; the generator only
    /// produces exact quotients, and a zero divisor yields `None`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => lhs.checked_div(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single arithmetic question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Left operand.
    pub lhs: i64,
    /// The operator between the operands.
    pub operator: Operator,
    /// Right operand.
    pub rhs: i64,
    /// The correct integer answer.
    pub answer: i64,
}

impl Problem {
    /// Build a problem, computing its answer from the operands.
    ///
    /// Returns `None` when the operator cannot be applied (division by zero
    /// or overflow).
    pub fn new(lhs: i64, operator: Operator, rhs: i64) -> Option<Self> {
        let answer = operator.apply(lhs, rhs)?;
        Some(Self {
            lhs,
            operator,
            rhs,
            answer,
        })
    }

    /// Question text such as `"7 + 5"`.
    pub fn question(&self) -> String {
        self.to_string()
    }

    /// Whether `guess` is the correct answer.
    pub fn is_correct(&self, guess: i64) -> bool {
        guess == self.answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// Settings chosen by the player before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Difficulty tier for every round.
    pub difficulty: Difficulty,
    /// Number of rounds to play unless the player quits.
    pub rounds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}
