// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod animal;
pub mod dairy;
pub mod feed;
pub mod identity;
pub mod ruminant;
pub mod spotted;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Identity
pub use identity::{AnimalId, IdSequence};

// Feed
pub use feed::{Feed, Ration};

// Base Animal
pub use animal::{validate_animal, Animal};

// Dairy Animal
pub use dairy::{validate_dairy_animal, DairyAnimal};

// Spotted Dairy Animal
pub use spotted::{validate_spotted_dairy_animal, SpottedDairyAnimal};

// Polymorphic herd surface
pub use ruminant::Ruminant;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid animal: {0}")]
    InvalidAnimal(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
