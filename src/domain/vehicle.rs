use crate::domain::ports::Drivable;
use crate::domain::UNIT_FACTOR;
use serde::{Deserialize, Serialize};

const ACCELERATION_STEP: f64 = 10.0;
const ELECTRIC_ACCELERATION_STEP: f64 = 20.0;
const BRAKE_STEP: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    make: String,
    speed: f64,
}

impl Car {
    pub fn new(make: impl Into<String>, speed: f64) -> Self {
        Self {
            make: make.into(),
            speed,
        }
    }

    pub fn speed_in_alternate_units(&self) -> f64 {
        self.speed_in_units(UNIT_FACTOR)
    }

    pub fn set_speed_in_alternate_units(&mut self, value: f64) -> &mut Self {
        self.set_speed_in_units(value, UNIT_FACTOR)
    }

    pub fn speed_in_units(&self, factor: f64) -> f64 {
        self.speed / factor
    }

    pub fn set_speed_in_units(&mut self, value: f64, factor: f64) -> &mut Self {
        self.speed = value * factor;
        self
    }
}

impl Drivable for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn accelerate(&mut self) -> &mut Self {
        self.speed += ACCELERATION_STEP;
        self
    }

    fn brake(&mut self) -> &mut Self {
        self.speed -= BRAKE_STEP;
        self
    }

    fn status(&self) -> String {
        format!("{} is going at a speed of {}", self.make, self.speed)
    }
}

/// A car with a battery. Charge is only reachable through its methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricCar {
    car: Car,
    battery_charge: i64,
}

impl ElectricCar {
    pub fn new(make: impl Into<String>, speed: f64, battery_charge: i64) -> Self {
        Self {
            car: Car::new(make, speed),
            battery_charge,
        }
    }

    pub fn battery_charge(&self) -> i64 {
        self.battery_charge
    }

    /// Overwrites the charge; no bounds check.
    pub fn charge_battery(&mut self, target: i64) -> &mut Self {
        self.battery_charge = target;
        self
    }

    pub fn speed_in_alternate_units(&self) -> f64 {
        self.car.speed_in_alternate_units()
    }

    pub fn set_speed_in_alternate_units(&mut self, value: f64) -> &mut Self {
        self.car.set_speed_in_alternate_units(value);
        self
    }

    pub fn speed_in_units(&self, factor: f64) -> f64 {
        self.car.speed_in_units(factor)
    }

    pub fn as_car(&self) -> &Car {
        &self.car
    }
}

impl Drivable for ElectricCar {
    fn make(&self) -> &str {
        self.car.make()
    }

    fn speed(&self) -> f64 {
        self.car.speed()
    }

    fn accelerate(&mut self) -> &mut Self {
        self.car.speed += ELECTRIC_ACCELERATION_STEP;
        self.battery_charge -= 1;
        self
    }

    fn brake(&mut self) -> &mut Self {
        self.car.brake();
        self
    }

    fn status(&self) -> String {
        format!(
            "{} is going at {} km/h, with a charge of {}%",
            self.car.make, self.car.speed, self.battery_charge
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerate_and_brake_are_additive() {
        let mut bmw = Car::new("BMW", 240.0);
        bmw.accelerate().accelerate();
        assert_eq!(bmw.speed(), 260.0);
        bmw.brake();
        assert_eq!(bmw.speed(), 255.0);
        assert_eq!(bmw.status(), "BMW is going at a speed of 255");
    }

    #[test]
    fn test_alternate_units_accessor_pair() {
        let mut ford = Car::new("Ford", 120.0);
        assert_eq!(ford.speed_in_alternate_units(), 75.0);

        ford.set_speed_in_alternate_units(50.0);
        assert_eq!(ford.speed(), 80.0);
    }

    #[test]
    fn test_speed_may_go_negative() {
        let mut car = Car::new("Fiat", 0.0);
        car.brake().brake();
        assert_eq!(car.speed(), -10.0);
    }

    #[test]
    fn test_electric_accelerate_consumes_charge() {
        let mut tesla = ElectricCar::new("Tesla", 120.0, 50);
        tesla.accelerate();
        assert_eq!((tesla.speed(), tesla.battery_charge()), (140.0, 49));
        tesla.accelerate();
        assert_eq!((tesla.speed(), tesla.battery_charge()), (160.0, 48));
        assert_eq!(
            tesla.status(),
            "Tesla is going at 160 km/h, with a charge of 48%"
        );
    }

    #[test]
    fn test_electric_brake_keeps_charge() {
        let mut tesla = ElectricCar::new("Tesla", 120.0, 23);
        tesla.brake();
        assert_eq!((tesla.speed(), tesla.battery_charge()), (115.0, 23));
    }

    #[test]
    fn test_charge_may_go_negative() {
        let mut tesla = ElectricCar::new("Tesla", 0.0, 1);
        tesla.accelerate().accelerate().accelerate();
        assert_eq!(tesla.battery_charge(), -2);
        assert_eq!(tesla.speed(), 60.0);
        assert_eq!(
            tesla.status(),
            "Tesla is going at 60 km/h, with a charge of -2%"
        );
    }

    #[test]
    fn test_electric_speed_in_units() {
        let rivian = ElectricCar::new("Rivian", 195.0, 49);
        assert_eq!(rivian.speed_in_units(2.0), 97.5);
        assert_eq!(rivian.speed_in_alternate_units(), 121.875);
    }

    #[test]
    fn test_charge_battery_overwrites() {
        let mut rivian = ElectricCar::new("Rivian", 120.0, 23);
        rivian.charge_battery(10);
        assert_eq!(rivian.battery_charge(), 10);
        rivian.charge_battery(90).charge_battery(10);
        assert_eq!(rivian.battery_charge(), 10);
    }

    #[test]
    fn test_electric_chaining() {
        let mut rivian = ElectricCar::new("Rivian", 120.0, 23);
        rivian
            .accelerate()
            .accelerate()
            .brake()
            .charge_battery(50)
            .accelerate();
        assert_eq!(rivian.speed(), 175.0);
        assert_eq!(rivian.battery_charge(), 49);
        assert_eq!(rivian.as_car().make(), "Rivian");
    }
}
