use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::invariants;
use crate::domain::identity::{AnimalId, IdSequence};
use crate::domain::{DomainError, DomainResult};

/// Represents a basic livestock animal
/// Feeding loads the stomach; digestion converts the whole load into
/// body weight. Every mutation is validated before it is applied, so a
/// rejected operation leaves the animal untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Internal immutable identifier
    pub(crate) id: AnimalId,

    /// Given name, stored trimmed, never empty
    pub(crate) name: String,

    /// Body weight in kilograms
    pub(crate) weight: f64,

    /// Age in years, capped at `AGE_MAX`
    pub(crate) age: u32,

    /// Current stomach load, within `[0, STOMACH_MAX]`
    pub(crate) stomach_fill: f64,

    /// Creation timestamp
    pub(crate) created_at: DateTime<Utc>,

    /// Last update timestamp
    pub(crate) updated_at: DateTime<Utc>,
}

impl Animal {
    /// Oldest age an animal can reach
    pub const AGE_MAX: u32 = 25;

    /// Stomach capacity
    pub const STOMACH_MAX: f64 = 50.0;

    /// Fraction of the stomach load converted into body weight
    pub const DIGESTION_YIELD: f64 = 0.25;

    /// Creates a new Animal with an empty stomach
    pub fn new(ids: &IdSequence, name: String, weight: f64, age: u32) -> DomainResult<Self> {
        Self::with_stomach_fill(ids, name, weight, age, 0.0)
    }

    /// Creates a new Animal with an initial stomach load
    /// The id is drawn only after validation passes, so a rejected
    /// construction never advances the sequence.
    pub fn with_stomach_fill(
        ids: &IdSequence,
        name: String,
        weight: f64,
        age: u32,
        stomach_fill: f64,
    ) -> DomainResult<Self> {
        let name = name.trim().to_string();
        invariants::validate_name(&name)?;
        invariants::validate_weight(weight)?;
        invariants::validate_age(age)?;
        invariants::validate_stomach_fill(stomach_fill)?;

        let now = Utc::now();
        Ok(Self {
            id: ids.next_id(),
            name,
            weight,
            age,
            stomach_fill,
            created_at: now,
            updated_at: now,
        })
    }

    /// Process-unique identifier
    pub fn id(&self) -> AnimalId {
        self.id
    }

    /// Given name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Age in years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Current stomach load
    pub fn stomach_fill(&self) -> f64 {
        self.stomach_fill
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Loads the stomach with a quantity of untyped feed
    /// Returns an error if the quantity is not strictly positive or if
    /// the load would push the stomach past `STOMACH_MAX`.
    pub fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(DomainError::InvalidAnimal(
                "Fed quantity must be strictly positive".to_string(),
            ));
        }
        if self.stomach_fill + quantity > Self::STOMACH_MAX {
            return Err(DomainError::InvalidAnimal(format!(
                "Stomach is full: capacity is {}",
                Self::STOMACH_MAX
            )));
        }

        self.stomach_fill += quantity;
        self.touch();
        Ok(())
    }

    /// Converts the stomach load into body weight at `DIGESTION_YIELD`
    /// Returns the weight gained. Digesting on an empty stomach is an
    /// error and changes nothing.
    pub fn digest(&mut self) -> DomainResult<f64> {
        if self.stomach_fill <= 0.0 {
            return Err(DomainError::InvalidAnimal(
                "Nothing to digest: the stomach is empty".to_string(),
            ));
        }

        let gain = self.stomach_fill * Self::DIGESTION_YIELD;
        self.weight += gain;
        self.stomach_fill = 0.0;
        self.touch();
        log::debug!("{} gained {:.2} kg from digestion", self.name, gain);
        Ok(gain)
    }

    /// Advances the age by one year
    /// Returns an error once `AGE_MAX` is reached; the age never moves
    /// past the cap.
    pub fn age_one_year(&mut self) -> DomainResult<()> {
        if self.age >= Self::AGE_MAX {
            return Err(DomainError::InvalidAnimal(format!(
                "Animal has reached the age limit of {}",
                Self::AGE_MAX
            )));
        }

        self.age += 1;
        self.touch();
        Ok(())
    }

    /// Refreshes the modification timestamp after a successful mutation
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Empties the stomach at the end of a digestion cycle
    pub(crate) fn clear_stomach(&mut self) {
        self.stomach_fill = 0.0;
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {}: {:.1} kg, age {}, stomach {:.1}",
            self.id, self.name, self.weight, self.age, self.stomach_fill
        )
    }
}
