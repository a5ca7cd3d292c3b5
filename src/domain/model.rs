use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub section: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    pub scenarios_run: Vec<String>,
    pub lines_emitted: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
