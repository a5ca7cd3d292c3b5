use crate::domain::ports::Aging;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::validate_full_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersonFields")]
pub struct Person {
    first_name: String,
    birth_year: i32,
    full_name: Option<String>,
}

/// Unchecked wire shape; only reachable through `TryFrom`.
#[derive(Deserialize)]
struct PersonFields {
    first_name: String,
    birth_year: i32,
    full_name: Option<String>,
}

impl TryFrom<PersonFields> for Person {
    type Error = ModelError;

    fn try_from(fields: PersonFields) -> Result<Self> {
        let mut person = Person::new(fields.first_name, fields.birth_year);
        if let Some(full_name) = fields.full_name {
            person.set_full_name(&full_name)?;
        }
        Ok(person)
    }
}

impl Person {
    /// Shared by every person; not stored per instance.
    pub const SPECIES: &'static str = "Human Being";

    pub fn new(first_name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            first_name: first_name.into(),
            birth_year,
            full_name: None,
        }
    }

    /// Builds a person from a validated full name. The first name is
    /// everything before the first space.
    pub fn with_full_name(full_name: &str, birth_year: i32) -> Result<Self> {
        let mut person = Self::new(first_word(full_name), birth_year);
        person.set_full_name(full_name)?;
        Ok(person)
    }

    /// Re-initialises a blank record in place.
    pub fn init(&mut self, first_name: impl Into<String>, birth_year: i32) -> &mut Self {
        self.first_name = first_name.into();
        self.birth_year = birth_year;
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub fn species(&self) -> &'static str {
        Self::SPECIES
    }

    /// Rejected names leave the stored value untouched.
    pub fn set_full_name(&mut self, candidate: &str) -> Result<()> {
        validate_full_name(candidate)?;
        self.full_name = Some(candidate.to_string());
        Ok(())
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn greet_all() -> &'static str {
        "Hey there 👋"
    }
}

impl Aging for Person {
    fn age_at(&self, year: i32) -> i32 {
        year - self.birth_year
    }

    fn introduce(&self) -> String {
        format!("Hey {}", self.full_name().unwrap_or(self.first_name.as_str()))
    }

    fn describe_age_at(&self, year: i32) -> String {
        format!("{} is {} years old", self.first_name, self.age_at(year))
    }
}

fn first_word(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// A person taking a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    person: Person,
    course: String,
}

impl Student {
    pub fn new(first_name: impl Into<String>, birth_year: i32, course: impl Into<String>) -> Self {
        Self {
            person: Person::new(first_name, birth_year),
            course: course.into(),
        }
    }

    pub fn from_person(person: Person, course: impl Into<String>) -> Self {
        Self {
            person,
            course: course.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn course(&self) -> &str {
        &self.course
    }
}

impl Aging for Student {
    fn age_at(&self, year: i32) -> i32 {
        self.person.age_at(year)
    }

    fn introduce(&self) -> String {
        let name = self
            .person
            .full_name()
            .unwrap_or(self.person.first_name());
        format!("My name is {} and I study {}", name, self.course)
    }

    fn describe_age_at(&self, year: i32) -> String {
        let age = self.age_at(year);
        format!(
            "I'm {} years old, but as a student I feel more like {}",
            age,
            age + 10
        )
    }
}
