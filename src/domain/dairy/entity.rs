use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::animal::Animal;
use crate::domain::identity::{AnimalId, IdSequence};
use crate::domain::{DomainError, DomainResult};

/// Represents a milk-producing animal
/// Shares the base animal state through composition and replaces the
/// digestion rule: instead of gaining weight, the stomach load is
/// converted into milk at `MILK_YIELD`, bounded by `MILK_CAPACITY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DairyAnimal {
    /// Shared base state
    pub(crate) animal: Animal,

    /// Milk currently stored, within `[0, MILK_CAPACITY]`
    pub(crate) milk_available: f64,

    /// Lifetime milk produced by digestion
    pub(crate) milk_total_produced: f64,

    /// Lifetime milk drawn off by milking
    pub(crate) milk_total_milked: f64,
}

impl DairyAnimal {
    /// Litres of milk produced per unit of stomach load
    pub const MILK_YIELD: f64 = 1.1;

    /// Most milk the animal can hold before being milked
    pub const MILK_CAPACITY: f64 = 40.0;

    /// Creates a new DairyAnimal with an empty stomach and no milk
    pub fn new(ids: &IdSequence, name: String, weight: f64, age: u32) -> DomainResult<Self> {
        Self::with_stomach_fill(ids, name, weight, age, 0.0)
    }

    /// Creates a new DairyAnimal with an initial stomach load
    pub fn with_stomach_fill(
        ids: &IdSequence,
        name: String,
        weight: f64,
        age: u32,
        stomach_fill: f64,
    ) -> DomainResult<Self> {
        Ok(Self {
            animal: Animal::with_stomach_fill(ids, name, weight, age, stomach_fill)?,
            milk_available: 0.0,
            milk_total_produced: 0.0,
            milk_total_milked: 0.0,
        })
    }

    /// Process-unique identifier
    pub fn id(&self) -> AnimalId {
        self.animal.id
    }

    /// Given name
    pub fn name(&self) -> &str {
        &self.animal.name
    }

    /// Body weight in kilograms
    pub fn weight(&self) -> f64 {
        self.animal.weight
    }

    /// Age in years
    pub fn age(&self) -> u32 {
        self.animal.age
    }

    /// Current stomach load
    pub fn stomach_fill(&self) -> f64 {
        self.animal.stomach_fill
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.animal.created_at
    }

    /// Last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.animal.updated_at
    }

    /// Milk currently stored
    pub fn milk_available(&self) -> f64 {
        self.milk_available
    }

    /// Lifetime milk produced
    pub fn milk_total_produced(&self) -> f64 {
        self.milk_total_produced
    }

    /// Lifetime milk milked
    pub fn milk_total_milked(&self) -> f64 {
        self.milk_total_milked
    }

    /// Loads the stomach with a quantity of untyped feed
    pub fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        self.animal.feed(quantity)
    }

    /// Converts the stomach load into stored milk at `MILK_YIELD`
    /// Returns the litres produced. Fails on an empty stomach, or when
    /// the production would push the store past `MILK_CAPACITY`; in
    /// both cases the stomach keeps its load.
    pub fn digest(&mut self) -> DomainResult<f64> {
        if self.animal.stomach_fill <= 0.0 {
            return Err(DomainError::InvalidAnimal(
                "Nothing to digest: the stomach is empty".to_string(),
            ));
        }

        let produced = self.animal.stomach_fill * Self::MILK_YIELD;
        self.store_production(produced)?;
        self.animal.clear_stomach();
        self.animal.touch();
        log::debug!("{} stored {:.2} L of milk", self.animal.name, produced);
        Ok(produced)
    }

    /// Draws off `litres` of stored milk
    /// Returns the litres collected. Fails if the quantity is not
    /// strictly positive or exceeds what is available.
    pub fn milk(&mut self, litres: f64) -> DomainResult<f64> {
        if !litres.is_finite() || litres <= 0.0 {
            return Err(DomainError::InvalidAnimal(
                "Milked quantity must be strictly positive".to_string(),
            ));
        }
        if litres > self.milk_available {
            return Err(DomainError::InvalidAnimal(format!(
                "Not enough milk: requested {}, available {}",
                litres, self.milk_available
            )));
        }

        self.milk_available -= litres;
        self.milk_total_milked += litres;
        self.animal.touch();
        log::debug!("{} gave {:.2} L of milk", self.animal.name, litres);
        Ok(litres)
    }

    /// Advances the age by one year
    pub fn age_one_year(&mut self) -> DomainResult<()> {
        self.animal.age_one_year()
    }

    /// Adds a production batch to the store, enforcing `MILK_CAPACITY`
    /// The check runs before any mutation, so a rejected batch leaves
    /// the store and both totals untouched.
    pub(crate) fn store_production(&mut self, produced: f64) -> DomainResult<()> {
        if self.milk_available + produced > Self::MILK_CAPACITY {
            return Err(DomainError::InvalidAnimal(format!(
                "Milk capacity of {} L would be exceeded",
                Self::MILK_CAPACITY
            )));
        }

        self.milk_available += produced;
        self.milk_total_produced += produced;
        Ok(())
    }
}

impl std::fmt::Display for DairyAnimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, milk {:.1} L available, {:.1} L milked",
            self.animal, self.milk_available, self.milk_total_milked
        )
    }
}
