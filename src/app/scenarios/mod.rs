pub mod account;
pub mod class;
pub mod constructor;
pub mod electric;
pub mod prototype;
pub mod vehicle;

use crate::config::DemoSettings;
use crate::domain::ports::Scenario;
use crate::utils::error::{ModelError, Result};

pub use account::AccountScenario;
pub use class::ClassScenario;
pub use constructor::ConstructorScenario;
pub use electric::ElectricScenario;
pub use prototype::PrototypeScenario;
pub use vehicle::VehicleScenario;

pub fn build_scenario(name: &str, settings: &DemoSettings) -> Result<Box<dyn Scenario>> {
    let scenario: Box<dyn Scenario> = match name {
        "constructor" => Box::new(ConstructorScenario {
            reference_year: settings.reference_year,
        }),
        "vehicle" => Box::new(VehicleScenario {
            unit_factor: settings.unit_factor,
        }),
        "class" => Box::new(ClassScenario {
            reference_year: settings.reference_year,
        }),
        "electric" => Box::new(ElectricScenario {
            unit_factor: settings.unit_factor,
        }),
        "account" => Box::new(AccountScenario),
        "prototype" => Box::new(PrototypeScenario {
            reference_year: settings.reference_year,
        }),
        other => {
            return Err(ModelError::UnknownScenario {
                name: other.to_string(),
            })
        }
    };
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCENARIO_NAMES;
    use crate::domain::ports::MemoryNarrator;

    fn run(scenario: &dyn Scenario) -> MemoryNarrator {
        let mut narrator = MemoryNarrator::new();
        scenario.run(&mut narrator).unwrap();
        narrator
    }

    #[test]
    fn test_every_known_name_builds() {
        let settings = DemoSettings::default();
        for name in SCENARIO_NAMES {
            assert_eq!(build_scenario(name, &settings).unwrap().name(), name);
        }
        assert!(matches!(
            build_scenario("teleport", &settings),
            Err(ModelError::UnknownScenario { .. })
        ));
    }

    #[test]
    fn test_constructor_transcript() {
        let narrator = run(&ConstructorScenario {
            reference_year: 2022,
        });
        let texts = narrator.texts();
        assert!(texts.contains(&"32"));
        assert!(texts.contains(&"31"));
        assert!(texts.contains(&"Human Being Human Being"));
        assert!(texts.contains(&"[2, 3, 4, 5, 6, 7]"));
    }

    #[test]
    fn test_vehicle_transcript() {
        let narrator = run(&VehicleScenario { unit_factor: 1.6 });
        assert_eq!(
            narrator.texts(),
            vec![
                "Audi is going at a speed of 230",
                "BMW is going at a speed of 250",
                "Audi is going at a speed of 225",
                "BMW is going at a speed of 245",
                "Ford in alternate units: 75",
                "Ford is going at a speed of 135",
                "Ford is going at a speed of 80",
            ]
        );
    }

    #[test]
    fn test_class_transcript_reports_rejection() {
        let narrator = run(&ClassScenario {
            reference_year: 2022,
        });
        let texts = narrator.texts();
        assert_eq!(texts[0], "Hey Jessica Davis");
        assert!(texts.contains(&"Walter is not a full name!"));
        assert!(texts.contains(&"Full name set to Walter White"));
        assert!(texts.contains(&"Stored full name: Walter White"));
        assert!(texts.contains(&"My name is Mike and I study Computer Science"));
        assert!(texts.contains(&"I'm 20 years old, but as a student I feel more like 30"));
    }

    #[test]
    fn test_electric_transcript() {
        let narrator = run(&ElectricScenario { unit_factor: 1.6 });
        let texts = narrator.texts();
        assert_eq!(texts[0], "Tesla is going at 140 km/h, with a charge of 22%");
        assert_eq!(texts[1], "Tesla is going at 135 km/h, with a charge of 22%");
        assert_eq!(texts[2], "Tesla is going at 155 km/h, with a charge of 89%");
        assert_eq!(texts[3], "Rivian is going at 195 km/h, with a charge of 49%");
        assert_eq!(texts[4], "Rivian in alternate units: 121.875");
    }

    #[test]
    fn test_electric_uses_configured_unit_factor() {
        let settings = DemoSettings {
            unit_factor: 2.0,
            ..DemoSettings::default()
        };
        let scenario = build_scenario("electric", &settings).unwrap();
        let mut narrator = MemoryNarrator::new();
        scenario.run(&mut narrator).unwrap();
        assert_eq!(narrator.texts()[4], "Rivian in alternate units: 97.5");
    }

    #[test]
    fn test_account_transcript() {
        let narrator = run(&AccountScenario);
        let texts = narrator.texts();
        assert_eq!(texts[0], "Jonas opened an account in EUR (de-DE)");
        assert_eq!(texts[1], "PIN 2222 rejected");
        assert_eq!(texts[2], "PIN 1111 accepted");
        assert_eq!(texts[3], "Jonas movements: [250.0, -140.0, 1000.0]");
        assert!(texts[4].starts_with("Loan not approved"));
        assert!(texts.contains(&"Balance: 22875 EUR"));
    }

    #[test]
    fn test_prototype_transcript() {
        let narrator = run(&PrototypeScenario {
            reference_year: 2022,
        });
        assert_eq!(
            narrator.texts(),
            vec![
                "Steven is 20 years old",
                "Sarah is 43 years old",
                "My name is Jay and I study Computer Science",
                "I'm 12 years old, but as a student I feel more like 22",
            ]
        );
    }
}
