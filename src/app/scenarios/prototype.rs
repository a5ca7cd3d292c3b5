use crate::domain::person::{Person, Student};
use crate::domain::ports::{Aging, Narrator, Scenario};
use crate::utils::error::Result;

/// Blank records initialised in place, then linked into a student.
pub struct PrototypeScenario {
    pub reference_year: i32,
}

impl Scenario for PrototypeScenario {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();

        let mut steven = Person::default();
        steven.init("Steven", 2002);
        narrator.narrate(section, steven.describe_age_at(self.reference_year))?;

        let mut sarah = Person::default();
        sarah.init("Sarah", 1979);
        narrator.narrate(section, sarah.describe_age_at(self.reference_year))?;

        let mut jay = Student::from_person(Person::default(), "Computer Science");
        jay.person_mut().init("Jay", 2010);
        narrator.narrate(section, jay.introduce())?;
        narrator.narrate(section, jay.describe_age_at(self.reference_year))?;

        Ok(())
    }
}
