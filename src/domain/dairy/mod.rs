// src/domain/dairy/mod.rs

pub mod entity;
pub mod invariants;

#[cfg(test)]
mod milking_tests;

pub use entity::DairyAnimal;
pub use invariants::validate_dairy_animal;
