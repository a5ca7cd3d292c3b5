use crate::domain::ports::{Drivable, Narrator, Scenario};
use crate::domain::vehicle::ElectricCar;
use crate::utils::error::Result;

pub struct ElectricScenario {
    pub unit_factor: f64,
}

impl Scenario for ElectricScenario {
    fn name(&self) -> &'static str {
        "electric"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();
        let mut tesla = ElectricCar::new("Tesla", 120.0, 23);

        narrator.narrate(section, tesla.accelerate().status())?;
        narrator.narrate(section, tesla.brake().status())?;

        tesla.charge_battery(90);
        narrator.narrate(section, tesla.accelerate().status())?;

        let mut rivian = ElectricCar::new("Rivian", 120.0, 23);
        rivian
            .accelerate()
            .accelerate()
            .accelerate()
            .brake()
            .charge_battery(50)
            .accelerate();
        narrator.narrate(section, rivian.status())?;
        narrator.narrate(
            section,
            format!(
                "{} in alternate units: {}",
                rivian.make(),
                rivian.speed_in_units(self.unit_factor)
            ),
        )?;

        Ok(())
    }
}
