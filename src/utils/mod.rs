pub mod collections;
pub mod error;
pub mod logger;
pub mod validation;
