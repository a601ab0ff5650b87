use super::entity::DairyAnimal;
use crate::domain::validate_animal;
use crate::domain::{DomainError, DomainResult};

/// Validates all DairyAnimal invariants, including the base animal ones
pub fn validate_dairy_animal(animal: &DairyAnimal) -> DomainResult<()> {
    validate_animal(&animal.animal)?;
    validate_milk_store(animal)?;
    validate_milk_totals(animal)?;
    Ok(())
}

/// Stored milk must sit within [0, MILK_CAPACITY]
fn validate_milk_store(animal: &DairyAnimal) -> DomainResult<()> {
    if !animal.milk_available.is_finite()
        || animal.milk_available < 0.0
        || animal.milk_available > DairyAnimal::MILK_CAPACITY
    {
        return Err(DomainError::InvalidAnimal(format!(
            "Stored milk must be between 0 and {}",
            DairyAnimal::MILK_CAPACITY
        )));
    }
    Ok(())
}

/// Lifetime totals only ever grow, so they must be finite and non-negative
fn validate_milk_totals(animal: &DairyAnimal) -> DomainResult<()> {
    if !animal.milk_total_produced.is_finite() || animal.milk_total_produced < 0.0 {
        return Err(DomainError::InvalidAnimal(
            "Total milk produced cannot be negative".to_string(),
        ));
    }
    if !animal.milk_total_milked.is_finite() || animal.milk_total_milked < 0.0 {
        return Err(DomainError::InvalidAnimal(
            "Total milk milked cannot be negative".to_string(),
        ));
    }
    if animal.milk_total_milked > animal.milk_total_produced {
        return Err(DomainError::InvalidAnimal(
            "Total milk milked cannot exceed total milk produced".to_string(),
        ));
    }
    Ok(())
}

/// Critical DairyAnimal Invariants:
///
/// 1. Every base Animal invariant holds for the shared state
/// 2. Stored milk stays within [0, MILK_CAPACITY]
/// 3. Digestion is the only way to raise the store, milking the only
///    way to lower it
/// 4. Lifetime totals are monotone, never negative, and milking never
///    outruns production
