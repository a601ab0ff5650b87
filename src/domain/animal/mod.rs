// src/domain/animal/mod.rs

pub mod entity;
pub mod invariants;


pub use entity::Animal;
pub use invariants::validate_animal;
