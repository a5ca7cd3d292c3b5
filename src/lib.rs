pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ConsoleNarrator;
pub use config::{toml_config::DemoConfig, DemoSettings, OutputFormat};
pub use core::demo::DemoEngine;
pub use domain::account::Account;
pub use domain::person::{Person, Student};
pub use domain::ports::{Aging, Drivable, MemoryNarrator, Narrator, Scenario};
pub use domain::vehicle::{Car, ElectricCar};
pub use domain::{REFERENCE_YEAR, UNIT_FACTOR};
pub use utils::error::{ModelError, Result};
