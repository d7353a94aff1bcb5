use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Keeps lines in memory. Used for transcripts, JSON output and tests.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_keeps_order() {
        let mut console = BufferConsole::new();
        console.write_line("first").unwrap();
        console.write_line("second").unwrap();
        assert_eq!(console.lines(), ["first", "second"]);
        assert_eq!(console.into_lines().len(), 2);
    }
}
