//! Line-oriented output sink for command results.
//!
//! Commands report progress as whole lines. The console sink prints them to stdout;
//! the captured sink keeps them in memory for assertions.

use console::style;
use std::sync::Mutex;

/// Destination for user-facing command output
pub trait CommandOutput: Send + Sync {
    /// Plain informational line
    fn log(&self, line: &str);

    /// A line reporting something that worked
    fn success(&self, line: &str) {
        self.log(line);
    }

    /// A line reporting a non-fatal failure
    fn warning(&self, line: &str) {
        self.log(line);
    }
}

/// Prints to stdout, coloured when stdout is a terminal
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl CommandOutput for ConsoleOutput {
    fn log(&self, line: &str) {
        println!("{}", line);
    }

    fn success(&self, line: &str) {
        println!("{}", style(line).green());
    }

    fn warning(&self, line: &str) {
        println!("{}", style(line).yellow());
    }
}

/// Keeps every line in memory, unstyled
#[derive(Debug, Default)]
pub struct CapturedOutput {
    lines: Mutex<Vec<String>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl CommandOutput for CapturedOutput {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
