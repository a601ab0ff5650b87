use super::entity::SpottedDairyAnimal;
use crate::domain::feed::Ration;
use crate::domain::validate_dairy_animal;
use crate::domain::{DomainError, DomainResult};

/// Validates all SpottedDairyAnimal invariants, including the dairy ones
pub fn validate_spotted_dairy_animal(animal: &SpottedDairyAnimal) -> DomainResult<()> {
    validate_dairy_animal(&animal.dairy)?;
    validate_spot_count("White", animal.white_spots)?;
    validate_spot_count("Black", animal.black_spots)?;
    validate_ration(&animal.ration)?;
    Ok(())
}

/// Spot counts must be strictly positive
pub(crate) fn validate_spot_count(side: &str, count: u32) -> DomainResult<()> {
    if count == 0 {
        return Err(DomainError::InvalidAnimal(format!(
            "{} spot count must be strictly positive",
            side
        )));
    }
    Ok(())
}

/// Ration entries carry strictly positive quantities
fn validate_ration(ration: &Ration) -> DomainResult<()> {
    for (feed, quantity) in ration {
        if !quantity.is_finite() || *quantity <= 0.0 {
            return Err(DomainError::InvalidAnimal(format!(
                "Ration quantity for {} must be strictly positive",
                feed
            )));
        }
    }
    Ok(())
}

/// Critical SpottedDairyAnimal Invariants:
///
/// 1. Every DairyAnimal invariant holds for the shared state
/// 2. Both spot counts are strictly positive
/// 3. The ration only holds strictly positive quantities
/// 4. Typed feeding is the only way to grow the ration, digestion the
///    only way to clear it
