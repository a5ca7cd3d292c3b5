pub mod demo;

pub use crate::domain::model::{DemoSummary, TranscriptLine};
pub use crate::domain::ports::{Narrator, Scenario};
pub use crate::utils::error::Result;
