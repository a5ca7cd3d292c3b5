use crate::config::OutputFormat;
use crate::domain::model::TranscriptLine;
use crate::domain::ports::Narrator;
use crate::utils::error::Result;
use std::io::Write;

/// Writes each transcript line to a writer (stdout by default).
pub struct ConsoleNarrator<W: Write = std::io::Stdout> {
    out: W,
    format: OutputFormat,
    emitted: usize,
}

impl ConsoleNarrator {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            emitted: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, section: &str, line: String) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(line),
            OutputFormat::Json => {
                let entry = TranscriptLine {
                    section: section.to_string(),
                    text: line,
                };
                Ok(serde_json::to_string(&entry)?)
            }
        }
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    /// Write failures are returned, not swallowed.
    fn narrate(&mut self, section: &str, line: String) -> Result<()> {
        let rendered = self.render(section, line)?;
        writeln!(self.out, "{}", rendered)?;
        self.emitted += 1;
        Ok(())
    }

    fn lines_emitted(&self) -> usize {
        self.emitted
    }
}
