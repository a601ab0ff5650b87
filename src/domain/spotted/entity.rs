use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::invariants;
use crate::domain::dairy::DairyAnimal;
use crate::domain::feed::{Feed, Ration};
use crate::domain::identity::{AnimalId, IdSequence};
use crate::domain::{DomainError, DomainResult};

/// Represents a spotted milk-producing animal
/// On top of the dairy behavior it accepts typed feed and keeps a
/// ration of what was fed since the last digestion. Digestion weighs
/// each ration entry by its feed coefficient, so the milk produced
/// depends on what the animal ate, not just how much.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpottedDairyAnimal {
    /// Shared dairy state
    pub(crate) dairy: DairyAnimal,

    /// White spot count, strictly positive
    pub(crate) white_spots: u32,

    /// Black spot count, strictly positive
    pub(crate) black_spots: u32,

    /// Typed feed eaten since the last digestion
    pub(crate) ration: Ration,
}

impl SpottedDairyAnimal {
    /// Creates a new SpottedDairyAnimal with an empty stomach
    pub fn new(
        ids: &IdSequence,
        name: String,
        weight: f64,
        age: u32,
        white_spots: u32,
        black_spots: u32,
    ) -> DomainResult<Self> {
        Self::with_stomach_fill(ids, name, weight, age, 0.0, white_spots, black_spots)
    }

    /// Creates a new SpottedDairyAnimal with an initial stomach load
    /// Spot counts are checked before the base state is built, so a
    /// rejected construction never draws an id.
    pub fn with_stomach_fill(
        ids: &IdSequence,
        name: String,
        weight: f64,
        age: u32,
        stomach_fill: f64,
        white_spots: u32,
        black_spots: u32,
    ) -> DomainResult<Self> {
        invariants::validate_spot_count("White", white_spots)?;
        invariants::validate_spot_count("Black", black_spots)?;

        Ok(Self {
            dairy: DairyAnimal::with_stomach_fill(ids, name, weight, age, stomach_fill)?,
            white_spots,
            black_spots,
            ration: Ration::new(),
        })
    }

    /// Process-unique identifier
    pub fn id(&self) -> AnimalId {
        self.dairy.animal.id
    }

    /// Given name
    pub fn name(&self) -> &str {
        &self.dairy.animal.name
    }

    /// Body weight in kilograms
    pub fn weight(&self) -> f64 {
        self.dairy.animal.weight
    }

    /// Age in years
    pub fn age(&self) -> u32 {
        self.dairy.animal.age
    }

    /// Current stomach load
    pub fn stomach_fill(&self) -> f64 {
        self.dairy.animal.stomach_fill
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.dairy.animal.created_at
    }

    /// Last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.dairy.animal.updated_at
    }

    /// Milk currently stored
    pub fn milk_available(&self) -> f64 {
        self.dairy.milk_available
    }

    /// Lifetime milk produced
    pub fn milk_total_produced(&self) -> f64 {
        self.dairy.milk_total_produced
    }

    /// Lifetime milk milked
    pub fn milk_total_milked(&self) -> f64 {
        self.dairy.milk_total_milked
    }

    /// White spot count
    pub fn white_spots(&self) -> u32 {
        self.white_spots
    }

    /// Black spot count
    pub fn black_spots(&self) -> u32 {
        self.black_spots
    }

    /// Typed feed eaten since the last digestion
    pub fn ration(&self) -> &Ration {
        &self.ration
    }

    /// Quantity of one feed kind in the current ration
    pub fn ration_of(&self, feed: Feed) -> f64 {
        self.ration.get(&feed).copied().unwrap_or(0.0)
    }

    /// Loads the stomach with untyped feed, leaving the ration alone
    /// Untyped content fills the stomach but carries no coefficient, so
    /// it produces no milk when digested.
    pub fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        self.dairy.feed(quantity)
    }

    /// Loads the stomach with a quantity of one feed kind
    /// The ration is updated only after the stomach accepts the load,
    /// so a rejected feeding leaves both untouched.
    pub fn feed_typed(&mut self, quantity: f64, feed: Feed) -> DomainResult<()> {
        self.dairy.feed(quantity)?;
        *self.ration.entry(feed).or_insert(0.0) += quantity;
        Ok(())
    }

    /// Converts the ration into stored milk, weighted per feed kind
    /// Each entry contributes `quantity * coefficient`, the weighted
    /// sum is scaled by `MILK_YIELD` and must fit under
    /// `MILK_CAPACITY`. On success the ration and the stomach are both
    /// cleared; on rejection both keep their content.
    pub fn digest(&mut self) -> DomainResult<f64> {
        if self.dairy.animal.stomach_fill <= 0.0 {
            return Err(DomainError::InvalidAnimal(
                "Nothing to digest: the stomach is empty".to_string(),
            ));
        }

        let weighted: f64 = self
            .ration
            .iter()
            .map(|(feed, quantity)| quantity * feed.milk_coefficient())
            .sum();
        let produced = weighted * DairyAnimal::MILK_YIELD;
        self.dairy.store_production(produced)?;
        self.ration.clear();
        self.dairy.animal.clear_stomach();
        self.dairy.animal.touch();
        log::debug!(
            "{} stored {:.2} L of milk from a typed ration",
            self.dairy.animal.name,
            produced
        );
        Ok(produced)
    }

    /// Draws off `litres` of stored milk
    pub fn milk(&mut self, litres: f64) -> DomainResult<f64> {
        self.dairy.milk(litres)
    }

    /// Advances the age by one year
    pub fn age_one_year(&mut self) -> DomainResult<()> {
        self.dairy.age_one_year()
    }
}

impl std::fmt::Display for SpottedDairyAnimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} white and {} black spots",
            self.dairy, self.white_spots, self.black_spots
        )
    }
}
