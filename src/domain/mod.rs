// Domain layer: the person, vehicle and account models plus the ports the
// demonstration harness is written against. No I/O happens here.

pub mod account;
pub mod model;
pub mod person;
pub mod ports;
pub mod vehicle;

/// Year that derived ages are computed against.
pub const REFERENCE_YEAR: i32 = 2022;

/// Divisor between the stored speed and the alternate unit (km/h to mi/h).
pub const UNIT_FACTOR: f64 = 1.6;
