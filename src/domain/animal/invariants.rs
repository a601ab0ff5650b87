use super::entity::Animal;
use crate::domain::{DomainError, DomainResult};

/// Validates all Animal invariants
pub fn validate_animal(animal: &Animal) -> DomainResult<()> {
    validate_name(&animal.name)?;
    validate_weight(animal.weight)?;
    validate_age(animal.age)?;
    validate_stomach_fill(animal.stomach_fill)?;
    Ok(())
}

/// Name cannot be empty or whitespace-only
pub(crate) fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidAnimal(
            "Animal name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Weight must be a finite, non-negative number
pub(crate) fn validate_weight(weight: f64) -> DomainResult<()> {
    if !weight.is_finite() {
        return Err(DomainError::InvalidAnimal(
            "Animal weight must be a finite number".to_string(),
        ));
    }
    if weight < 0.0 {
        return Err(DomainError::InvalidAnimal(
            "Animal weight cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// Age lower bound is enforced by u32, only the cap is checked here
pub(crate) fn validate_age(age: u32) -> DomainResult<()> {
    if age > Animal::AGE_MAX {
        return Err(DomainError::InvalidAnimal(format!(
            "Animal age must be between 0 and {}",
            Animal::AGE_MAX
        )));
    }
    Ok(())
}

/// Stomach fill must sit within [0, STOMACH_MAX]
pub(crate) fn validate_stomach_fill(stomach_fill: f64) -> DomainResult<()> {
    if !stomach_fill.is_finite() || stomach_fill < 0.0 || stomach_fill > Animal::STOMACH_MAX {
        return Err(DomainError::InvalidAnimal(format!(
            "Stomach fill must be between 0 and {}",
            Animal::STOMACH_MAX
        )));
    }
    Ok(())
}

/// Critical Animal Invariants:
///
/// 1. Identity is immutable and unique within its sequence
/// 2. Name is never empty or whitespace-only
/// 3. Weight is finite and never negative
/// 4. Age only moves forward, one year at a time, capped at AGE_MAX
/// 5. Stomach fill stays within [0, STOMACH_MAX]
/// 6. Feeding is the only way to raise the stomach fill, digestion the
///    only way to clear it
/// 7. A rejected operation changes nothing
