use crate::domain::model::TranscriptLine;
use crate::domain::REFERENCE_YEAR;
use crate::utils::error::Result;

/// Anything with a derivable age that can introduce itself.
pub trait Aging {
    fn age_at(&self, year: i32) -> i32;

    fn introduce(&self) -> String;

    fn age(&self) -> i32 {
        self.age_at(REFERENCE_YEAR)
    }

    fn describe_age_at(&self, year: i32) -> String {
        format!("I'm {} years old", self.age_at(year))
    }

    fn describe_age(&self) -> String {
        self.describe_age_at(REFERENCE_YEAR)
    }
}

/// Vehicles with a make and a speed that can be mutated in place.
pub trait Drivable {
    fn make(&self) -> &str;

    fn speed(&self) -> f64;

    fn accelerate(&mut self) -> &mut Self;

    fn brake(&mut self) -> &mut Self;

    fn status(&self) -> String;
}

/// Sink for demonstration output.
pub trait Narrator {
    fn narrate(&mut self, section: &str, line: String) -> Result<()>;

    fn lines_emitted(&self) -> usize;
}

pub trait Scenario {
    fn name(&self) -> &'static str;

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()>;
}

/// Collects transcript lines in memory.
#[derive(Debug, Default)]
pub struct MemoryNarrator {
    pub lines: Vec<TranscriptLine>,
}

impl MemoryNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn section(&self, section: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.section == section)
            .map(|l| l.text.as_str())
            .collect()
    }
}

impl Narrator for MemoryNarrator {
    fn narrate(&mut self, section: &str, line: String) -> Result<()> {
        self.lines.push(TranscriptLine {
            section: section.to_string(),
            text: line,
        });
        Ok(())
    }

    fn lines_emitted(&self) -> usize {
        self.lines.len()
    }
}
