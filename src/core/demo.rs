use crate::app::scenarios::build_scenario;
use crate::config::DemoSettings;
use crate::core::{DemoSummary, Narrator, Scenario};
use crate::utils::error::Result;
use chrono::Utc;

/// Runs scenarios in order against a narrator.
pub struct DemoEngine {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl DemoEngine {
    pub fn new(scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self { scenarios }
    }

    pub fn from_settings(settings: &DemoSettings) -> Result<Self> {
        let scenarios = settings
            .scenarios
            .iter()
            .map(|name| build_scenario(name, settings))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(scenarios))
    }

    pub fn scenario_names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    /// Stops at the first failing scenario.
    pub fn run(&self, narrator: &mut dyn Narrator) -> Result<DemoSummary> {
        let started_at = Utc::now();
        let lines_before = narrator.lines_emitted();
        let mut scenarios_run = Vec::with_capacity(self.scenarios.len());

        tracing::info!("Running {} scenario(s)", self.scenarios.len());

        for scenario in &self.scenarios {
            tracing::debug!("Starting scenario {}", scenario.name());
            let before = narrator.lines_emitted();

            if let Err(e) = scenario.run(narrator) {
                tracing::error!("Scenario {} failed: {}", scenario.name(), e);
                return Err(e);
            }

            tracing::info!(
                "Scenario {} finished ({} lines)",
                scenario.name(),
                narrator.lines_emitted() - before
            );
            scenarios_run.push(scenario.name().to_string());
        }

        Ok(DemoSummary {
            scenarios_run,
            lines_emitted: narrator.lines_emitted() - lines_before,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
