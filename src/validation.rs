//! Input validation for carbon accounting data.
//!
//! Checks integrity of inventories and activity profiles before they reach
//! the calculator. Detects:
//! - Negative quantities (emission, miles, kWh)
//! - Non-finite quantities (NaN, ±∞)
//! - Blank source names
//!
//! The calculator itself never rejects input — a negative entry would
//! silently reduce the total — so callers collecting user input must run
//! these checks first.

use crate::models::{ActivityProfile, EmissionInventory};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A quantity is below zero.
    NegativeQuantity,
    /// A quantity is NaN or infinite.
    NonFiniteQuantity,
    /// A source has an empty or whitespace-only name.
    BlankSourceName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an emission inventory.
///
/// Checks:
/// 1. Every source name is non-blank
/// 2. Every emission value is finite
/// 3. Every emission value is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// An empty inventory is valid.
pub fn validate_inventory(inventory: &EmissionInventory) -> ValidationResult {
    let mut errors = Vec::new();

    for (row, source) in inventory.iter().enumerate() {
        if source.source.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSourceName,
                format!("Row {row}: source name is blank"),
            ));
        }
        check_quantity(&mut errors, source.emission_kg, || {
            format!("Source '{}': emission", source.source)
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an activity profile.
///
/// Checks that miles and kWh, where present, are finite and non-negative.
/// An empty profile is valid.
pub fn validate_activity(profile: &ActivityProfile) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(transport) = &profile.transport {
        check_quantity(&mut errors, transport.miles, || "Transport: miles".to_string());
    }
    if let Some(energy) = &profile.energy {
        check_quantity(&mut errors, energy.usage_kwh, || "Energy: usage".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_quantity(errors: &mut Vec<ValidationError>, value: f64, label: impl Fn() -> String) {
    if !value.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteQuantity,
            format!("{} is not a finite number ({value})", label()),
        ));
    } else if value < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeQuantity,
            format!("{} is negative ({value})", label()),
        ));
    }
}
