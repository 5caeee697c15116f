//! Interactive configuration prompts shown before and after a session.

use crate::error::GameError;
use crate::model::{Difficulty, DEFAULT_ROUNDS};
use crate::traits::Console;

/// Width of the `=` and `-` rules printed around sections.
pub const RULE_WIDTH: usize = 48;

pub const DIFFICULTY_PROMPT: &str = "Choose difficulty (easy / medium / hard) [easy]: ";
pub const ROUNDS_PROMPT: &str = "How many questions would you like? [10]: ";
pub const SAVE_PROMPT: &str = "Save results to a text file? (y/N): ";

/// Print the title banner and instructions.
pub fn print_intro<C: Console + ?Sized>(console: &mut C) -> Result<(), GameError> {
    let rule = "=".repeat(RULE_WIDTH);
    console.write_line(&rule)?;
    console.write_line("     MENTAL MATH TRAINER  •  Quick Brain Game")?;
    console.write_line(&rule)?;
    console.write_line("Instructions:")?;
    console.write_line(" - Choose a difficulty (easy / medium / hard).")?;
    console.write_line(" - Answer each math problem as fast and as accurate as you can.")?;
    console.write_line(" - Type 'quit' anytime to stop early.")?;
    console.write_line("")?;
    Ok(())
}

/// Ask for a difficulty until a valid one is given.
///
/// A blank line or closed input selects [`Difficulty::Easy`].
pub fn choose_difficulty<C: Console + ?Sized>(console: &mut C) -> Result<Difficulty, GameError> {
    loop {
        let Some(line) = console.read_line(DIFFICULTY_PROMPT)? else {
            return Ok(Difficulty::default());
        };
        let level = line.trim();
        if level.is_empty() {
            return Ok(Difficulty::default());
        }
        match level.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(e) => {
                tracing::debug!("rejected difficulty input: {e}");
                console.write_line("Please type easy, medium, or hard.")?;
            }
        }
    }
}

/// Ask for a positive round count until one is given.
///
/// A blank line or closed input selects [`DEFAULT_ROUNDS`].
pub fn choose_rounds<C: Console + ?Sized>(console: &mut C) -> Result<u32, GameError> {
    loop {
        let Some(line) = console.read_line(ROUNDS_PROMPT)? else {
            return Ok(DEFAULT_ROUNDS);
        };
        let input = line.trim();
        if input.is_empty() {
            return Ok(DEFAULT_ROUNDS);
        }
        match input.parse::<i64>() {
            Ok(n) if n <= 0 => {
                tracing::debug!(input, "rejected non-positive round count");
                console.write_line("Pick a positive number.")?;
            }
            Ok(n) => match u32::try_from(n) {
                Ok(rounds) => return Ok(rounds),
                Err(_) => {
                    tracing::debug!(input, "rejected oversized round count");
                    console.write_line("Please type a number (e.g., 10).")?;
                }
            },
            Err(_) => {
                tracing::debug!(input, "rejected non-numeric round count");
                console.write_line("Please type a number (e.g., 10).")?;
            }
        }
    }
}

/// Ask whether to save the results. Only `y` (any case) means yes.
pub fn confirm_save<C: Console + ?Sized>(console: &mut C) -> Result<bool, GameError> {
    let answer = console.read_line(SAVE_PROMPT)?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn intro_mentions_quit() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        print_intro(&mut console).unwrap();
        assert!(console.output().contains("MENTAL MATH TRAINER"));
        assert!(console.output().contains("Type 'quit' anytime"));
    }

    #[test]
    fn difficulty_blank_defaults_to_easy() {
        let mut console = ScriptedConsole::new([""]);
        assert_eq!(choose_difficulty(&mut console).unwrap(), Difficulty::Easy);
    }

    #[test]
    fn difficulty_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["extreme", "42", "  MEDIUM "]);
        assert_eq!(choose_difficulty(&mut console).unwrap(), Difficulty::Medium);
        let complaints = console
            .transcript()
            .iter()
            .filter(|l| l.as_str() == "Please type easy, medium, or hard.")
            .count();
        assert_eq!(complaints, 2);
    }

    #[test]
    fn difficulty_closed_input_defaults_to_easy() {
        let mut console = ScriptedConsole::new(["nope"]);
        assert_eq!(choose_difficulty(&mut console).unwrap(), Difficulty::Easy);
    }

    #[test]
    fn rounds_blank_defaults_to_ten() {
        let mut console = ScriptedConsole::new([""]);
        assert_eq!(choose_rounds(&mut console).unwrap(), 10);
    }

    #[test]
    fn rounds_zero_is_rejected() {
        let mut console = ScriptedConsole::new(["0", "-4", "abc", "7"]);
        assert_eq!(choose_rounds(&mut console).unwrap(), 7);
        let out = console.output();
        assert_eq!(out.matches("Pick a positive number.").count(), 2);
        assert_eq!(out.matches("Please type a number (e.g., 10).").count(), 1);
    }

    #[test]
    fn rounds_oversized_is_rejected() {
        let mut console = ScriptedConsole::new(["99999999999", "3"]);
        assert_eq!(choose_rounds(&mut console).unwrap(), 3);
    }

    #[test]
    fn save_only_on_y() {
        assert!(confirm_save(&mut ScriptedConsole::new(["y"])).unwrap());
        assert!(confirm_save(&mut ScriptedConsole::new([" Y "])).unwrap());
        assert!(!confirm_save(&mut ScriptedConsole::new(["yes"])).unwrap());
        assert!(!confirm_save(&mut ScriptedConsole::new([""])).unwrap());
        assert!(!confirm_save(&mut ScriptedConsole::new(Vec::<String>::new())).unwrap());
    }
}
