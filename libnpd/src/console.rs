use std::io::{Stdout, Write, stdout};
/////////////////////////////////////////
use anyhow::{Context, Result};
/////////////////////////////////////////

/// Line oriented sink for the demo's log output.
/// Every line is flushed as soon as it is written so the transcript stays ordered
/// even when the process is observed from the outside (e.g. under a debugger).
pub struct Console<W: Write> {
    writer: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Console { writer: stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Console { writer }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write to console")?;
        self.writer.flush().context("Failed to flush console")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        return self.writer;
    }
}

impl Console<Vec<u8>> {
    /// Captured lines, only available for in-memory consoles.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.writer)
            .lines()
            .map(|line| line.to_string())
            .collect()
    }
}
