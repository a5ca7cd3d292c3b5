use crate::domain::ports::{Drivable, Narrator, Scenario};
use crate::domain::vehicle::Car;
use crate::utils::error::Result;

pub struct VehicleScenario {
    pub unit_factor: f64,
}

impl Scenario for VehicleScenario {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();
        let mut audi = Car::new("Audi", 220.0);
        let mut bmw = Car::new("BMW", 240.0);

        for car in [&mut audi, &mut bmw] {
            narrator.narrate(section, car.accelerate().status())?;
        }
        for car in [&mut audi, &mut bmw] {
            narrator.narrate(section, car.brake().status())?;
        }

        let mut ford = Car::new("Ford", 120.0);
        narrator.narrate(
            section,
            format!(
                "{} in alternate units: {}",
                ford.make(),
                ford.speed_in_units(self.unit_factor)
            ),
        )?;
        ford.accelerate().accelerate().brake();
        narrator.narrate(section, ford.status())?;

        ford.set_speed_in_units(50.0, self.unit_factor);
        narrator.narrate(section, ford.status())?;

        Ok(())
    }
}
