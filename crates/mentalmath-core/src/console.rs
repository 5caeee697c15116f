//! Console implementations: the real terminal and a scripted double.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::traits::Console;

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

/// A console that replays canned input lines and records everything shown.
///
/// Once the scripted lines run out, reads report a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer reads with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and output line, in the order they were produced.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined with newlines.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_inputs_then_closes() {
        let mut console = ScriptedConsole::new(["12", "quit"]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("12"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("quit"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn scripted_console_records_prompts_and_lines() {
        let mut console = ScriptedConsole::new(["x"]);
        console.write_line("hello").unwrap();
        console.read_line("Your answer: ").unwrap();
        assert_eq!(console.transcript(), ["hello", "Your answer: "]);
        assert_eq!(console.output(), "hello\nYour answer: ");
    }
}
