use crate::domain::person::{Person, Student};
use crate::domain::ports::{Aging, Narrator, Scenario};
use crate::utils::error::Result;

/// Validated full names, the static greeting and student specialisation.
pub struct ClassScenario {
    pub reference_year: i32,
}

impl Scenario for ClassScenario {
    fn name(&self) -> &'static str {
        "class"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();

        let jessica = Person::with_full_name("Jessica Davis", 1996)?;
        narrator.narrate(section, jessica.introduce())?;
        narrator.narrate(section, jessica.describe_age_at(self.reference_year))?;

        let mut walter = Person::new("Walter", 1965);
        for candidate in ["Walter", "Walter White"] {
            match walter.set_full_name(candidate) {
                Ok(()) => narrator.narrate(section, format!("Full name set to {}", candidate))?,
                Err(e) => {
                    tracing::warn!("Rejected full name: {}", e);
                    narrator.narrate(section, format!("{} is not a full name!", candidate))?;
                }
            }
        }
        narrator.narrate(
            section,
            format!("Stored full name: {}", walter.full_name().unwrap_or("undefined")),
        )?;

        narrator.narrate(section, Person::greet_all().to_string())?;

        let mike = Student::new("Mike", 2002, "Computer Science");
        narrator.narrate(section, mike.introduce())?;
        narrator.narrate(section, mike.describe_age_at(self.reference_year))?;

        let martha = Student::from_person(
            Person::with_full_name("Martha Jones", 2012)?,
            "Computer Science",
        );
        narrator.narrate(section, martha.introduce())?;
        narrator.narrate(section, martha.describe_age_at(self.reference_year))?;

        Ok(())
    }
}
