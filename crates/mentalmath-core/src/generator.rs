//! Random arithmetic problem generation.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Difficulty, Operator, Problem};
use crate::traits::ProblemSource;

const EASY_OPERANDS: RangeInclusive<i64> = 1..=20;
const MEDIUM_OPERANDS: RangeInclusive<i64> = 2..=50;
const HARD_LHS: RangeInclusive<i64> = 10..=150;
const HARD_RHS: RangeInclusive<i64> = 2..=100;
/// Range for both the divisor and the quotient of hard division problems.
const HARD_DIVISION_FACTORS: RangeInclusive<i64> = 2..=12;

/// Generate one problem for `difficulty` using `rng`.
///
/// - easy: operands in 1..=20, `+` or `-`
/// - medium: operands in 2..=50, `+`, `-` or `*`
/// - hard: any of the four operators; division is built as
///   `divisor * quotient / divisor` so it always divides exactly, the others
///   draw the left operand from 10..=150 and the right from 2..=100
pub fn generate_problem<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let operators = difficulty.operators();
    loop {
        let operator = operators[rng.random_range(0..operators.len())];
        let (lhs, rhs) = draw_operands(rng, difficulty, operator);
        // The operand ranges never overflow or divide by zero, so this
        // returns on the first draw.
        if let Some(problem) = Problem::new(lhs, operator, rhs) {
            return problem;
        }
    }
}

fn draw_operands<R: Rng>(rng: &mut R, difficulty: Difficulty, operator: Operator) -> (i64, i64) {
    match (difficulty, operator) {
        (Difficulty::Easy, _) => (
            rng.random_range(EASY_OPERANDS),
            rng.random_range(EASY_OPERANDS),
        ),
        (Difficulty::Medium, _) => (
            rng.random_range(MEDIUM_OPERANDS),
            rng.random_range(MEDIUM_OPERANDS),
        ),
        (Difficulty::Hard, Operator::Divide) => {
            let divisor = rng.random_range(HARD_DIVISION_FACTORS);
            let quotient = rng.random_range(HARD_DIVISION_FACTORS);
            (divisor * quotient, divisor)
        }
        (Difficulty::Hard, _) => (rng.random_range(HARD_LHS), rng.random_range(HARD_RHS)),
    }
}

/// A [`ProblemSource`] that owns its random number generator.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the next problem for `difficulty`.
    pub fn generate(&mut self, difficulty: Difficulty) -> Problem {
        generate_problem(&mut self.rng, difficulty)
    }
}

impl ProblemGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same problems.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ProblemSource for ProblemGenerator<R> {
    fn next_problem(&mut self, difficulty: Difficulty) -> Problem {
        let problem = self.generate(difficulty);
        tracing::debug!(
            %difficulty,
            question = %problem,
            answer = problem.answer,
            "generated problem"
        );
        problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 2_000;

    /// Re-derive the answer from the rendered question text alone.
    fn recompute_from_text(question: &str) -> i64 {
        let parts: Vec<&str> = question.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected question shape: {question}");
        let lhs: i64 = parts[0].parse().unwrap();
        let rhs: i64 = parts[2].parse().unwrap();
        match parts[1] {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" => lhs * rhs,
            "/" => {
                assert_eq!(lhs % rhs, 0, "inexact division: {question}");
                lhs / rhs
            }
            other => panic!("unexpected operator {other:?} in {question}"),
        }
    }

    #[test]
    fn answers_match_question_text_for_every_tier() {
        let mut generator = ProblemGenerator::from_seed(42);
        for difficulty in Difficulty::ALL {
            for _ in 0..SAMPLES {
                let p = generator.generate(difficulty);
                assert_eq!(
                    recompute_from_text(&p.question()),
                    p.answer,
                    "mismatch for {difficulty}: {p}"
                );
            }
        }
    }

    #[test]
    fn easy_ranges_and_operators() {
        let mut generator = ProblemGenerator::from_seed(1);
        for _ in 0..SAMPLES {
            let p = generator.generate(Difficulty::Easy);
            assert!(EASY_OPERANDS.contains(&p.lhs), "{p}");
            assert!(EASY_OPERANDS.contains(&p.rhs), "{p}");
            assert!(matches!(p.operator, Operator::Add | Operator::Subtract));
        }
    }

    #[test]
    fn medium_ranges_and_operators() {
        let mut generator = ProblemGenerator::from_seed(2);
        let mut saw_multiply = false;
        for _ in 0..SAMPLES {
            let p = generator.generate(Difficulty::Medium);
            assert!(MEDIUM_OPERANDS.contains(&p.lhs), "{p}");
            assert!(MEDIUM_OPERANDS.contains(&p.rhs), "{p}");
            assert_ne!(p.operator, Operator::Divide);
            saw_multiply |= p.operator == Operator::Multiply;
        }
        assert!(saw_multiply);
    }

    #[test]
    fn hard_division_is_always_exact() {
        let mut generator = ProblemGenerator::from_seed(3);
        let mut divisions = 0;
        for _ in 0..SAMPLES {
            let p = generator.generate(Difficulty::Hard);
            if p.operator == Operator::Divide {
                divisions += 1;
                assert!(HARD_DIVISION_FACTORS.contains(&p.rhs), "{p}");
                assert_eq!(p.lhs % p.rhs, 0, "{p}");
                assert!(HARD_DIVISION_FACTORS.contains(&p.answer), "{p}");
            } else {
                assert!(HARD_LHS.contains(&p.lhs), "{p}");
                assert!(HARD_RHS.contains(&p.rhs), "{p}");
            }
        }
        assert!(divisions > 0, "expected at least one division problem");
    }

    #[test]
    fn same_seed_same_problems() {
        let mut a = ProblemGenerator::from_seed(7);
        let mut b = ProblemGenerator::from_seed(7);
        for _ in 0..50 {
            assert_eq!(a.generate(Difficulty::Hard), b.generate(Difficulty::Hard));
        }
    }

    #[test]
    fn generated_problems_agree_with_problem_new() {
        let mut generator = ProblemGenerator::from_seed(13);
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let p = generator.generate(difficulty);
                assert_eq!(Problem::new(p.lhs, p.operator, p.rhs), Some(p.clone()));
            }
        }
    }

    #[test]
    fn free_function_accepts_any_rng() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = generate_problem(&mut rng, Difficulty::Medium);
        assert_eq!(p.operator.apply(p.lhs, p.rhs), Some(p.answer));
    }
}
