use crate::utils::error::{ModelError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A full name needs at least one space between its parts.
pub fn validate_full_name(candidate: &str) -> Result<()> {
    if candidate.contains(' ') {
        Ok(())
    } else {
        Err(ModelError::NotAFullName {
            candidate: candidate.to_string(),
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(ModelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    for value in values {
        if !allowed_set.contains(value.as_str()) {
            return Err(ModelError::InvalidConfigValue {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Allowed values: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Martin Garrix").is_ok());
        assert!(validate_full_name("Jessica Ann Davis").is_ok());
        assert!(validate_full_name("Adam").is_err());
        assert!(validate_full_name("").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("vehicle.unit_factor", 1.6).is_ok());
        assert!(validate_positive("vehicle.unit_factor", 0.0).is_err());
        assert!(validate_positive("vehicle.unit_factor", -2.0).is_err());
        assert!(validate_positive("vehicle.unit_factor", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("person.reference_year", 2022, 1, 9999).is_ok());
        assert!(validate_range("person.reference_year", 0, 1, 9999).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let formats = vec!["text".to_string()];
        assert!(validate_one_of("demo.format", &formats, &["text", "json"]).is_ok());

        let formats = vec!["xml".to_string()];
        assert!(validate_one_of("demo.format", &formats, &["text", "json"]).is_err());
    }
}
