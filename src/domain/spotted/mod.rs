// src/domain/spotted/mod.rs

pub mod entity;
pub mod invariants;


pub use entity::SpottedDairyAnimal;
pub use invariants::validate_spotted_dairy_animal;
