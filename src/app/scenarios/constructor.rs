use crate::domain::person::Person;
use crate::domain::ports::{Aging, Narrator, Scenario};
use crate::utils::collections::UniqueExt;
use crate::utils::error::Result;

/// Plain construction, derived ages and the shared species attribute.
pub struct ConstructorScenario {
    pub reference_year: i32,
}

impl Scenario for ConstructorScenario {
    fn name(&self) -> &'static str {
        "constructor"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();
        let john = Person::new("john", 1990);
        let max = Person::new("max", 1991);

        for person in [&john, &max] {
            narrator.narrate(section, format!("{:?}", person))?;
        }
        for person in [&john, &max] {
            narrator.narrate(section, person.age_at(self.reference_year).to_string())?;
        }

        narrator.narrate(section, format!("{} {}", john.species(), max.species()))?;

        let numbers = [2, 3, 4, 5, 6, 7, 5, 3, 3];
        narrator.narrate(section, format!("{:?}", numbers.unique()))?;

        Ok(())
    }
}
