pub mod toml_config;

use crate::domain::{REFERENCE_YEAR, UNIT_FACTOR};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_positive, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Canonical scenario order.
pub const SCENARIO_NAMES: [&str; 6] = [
    "constructor",
    "vehicle",
    "class",
    "electric",
    "account",
    "prototype",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "oop-demo")]
#[command(about = "Walks through the person, vehicle and account models")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Scenario to run; repeat to run several (default: all)
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<String>,

    /// Transcript format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the config file and the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSettings {
    pub scenarios: Vec<String>,
    pub format: OutputFormat,
    pub reference_year: i32,
    pub unit_factor: f64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            scenarios: SCENARIO_NAMES.iter().map(|s| s.to_string()).collect(),
            format: OutputFormat::Text,
            reference_year: REFERENCE_YEAR,
            unit_factor: UNIT_FACTOR,
        }
    }
}

impl DemoSettings {
    /// Command-line values win over the config file.
    pub fn with_overrides(mut self, scenarios: &[String], format: Option<OutputFormat>) -> Self {
        if !scenarios.is_empty() {
            self.scenarios = scenarios.to_vec();
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_one_of("demo.scenarios", &self.scenarios, &SCENARIO_NAMES)?;
        validate_range("person.reference_year", self.reference_year, 1, 9999)?;
        validate_positive("vehicle.unit_factor", self.unit_factor)?;
        Ok(())
    }
}
