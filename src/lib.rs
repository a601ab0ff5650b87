//! Herdbook - Validated livestock state-transition model
//!
//! An in-memory herd: a base grazing animal, a milk-producing variant and
//! a spotted variant that tracks a typed ration. State moves through four
//! validated operations (feed, digest, milk, age); every operation checks
//! its invariants before mutating, so a rejected call changes nothing.
//!
//! # Example
//!
//! ```
//! use herdbook::{DairyAnimal, IdSequence};
//!
//! # fn main() -> herdbook::DomainResult<()> {
//! let ids = IdSequence::new();
//! let mut cow = DairyAnimal::new(&ids, "Lola".to_string(), 500.0, 5)?;
//!
//! cow.feed(10.0)?;
//! assert_eq!(cow.digest()?, 11.0);
//! assert_eq!(cow.milk(3.0)?, 3.0);
//! assert_eq!(cow.milk_available(), 8.0);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod domain;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_animal,
    validate_dairy_animal,
    validate_spotted_dairy_animal,
    // Base Animal
    Animal,
    // Identity
    AnimalId,
    // Dairy Animal
    DairyAnimal,
    // Feed
    Feed,
    IdSequence,
    Ration,
    // Polymorphic herd surface
    Ruminant,
    // Spotted Dairy Animal
    SpottedDairyAnimal,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
