use crate::domain::animal::Animal;
use crate::domain::dairy::DairyAnimal;
use crate::domain::feed::Feed;
use crate::domain::identity::AnimalId;
use crate::domain::spotted::SpottedDairyAnimal;
use crate::domain::{DomainError, DomainResult};

/// Shared surface of the three animal variants
/// Object-safe, so a mixed herd can be driven as `Vec<Box<dyn Ruminant>>`.
/// Each variant brings its own digestion rule; typed feeding is refused
/// by default and only the spotted variant overrides it. Milking stays
/// off the trait because extraction belongs to the dairy types alone.
pub trait Ruminant {
    /// Process-unique identifier
    fn id(&self) -> AnimalId;

    /// Given name
    fn name(&self) -> &str;

    /// Body weight in kilograms
    fn weight(&self) -> f64;

    /// Age in years
    fn age(&self) -> u32;

    /// Current stomach load
    fn stomach_fill(&self) -> f64;

    /// Loads the stomach with untyped feed
    fn feed(&mut self, quantity: f64) -> DomainResult<()>;

    /// Loads the stomach with a quantity of one feed kind
    fn feed_typed(&mut self, _quantity: f64, _feed: Feed) -> DomainResult<()> {
        Err(DomainError::InvalidAnimal(
            "This animal does not take typed feed".to_string(),
        ))
    }

    /// Converts the stomach load with the variant's own rule
    /// Returns the converted quantity: kilograms gained for the base
    /// animal, litres of milk for the dairy variants.
    fn digest(&mut self) -> DomainResult<f64>;

    /// Advances the age by one year
    fn age_one_year(&mut self) -> DomainResult<()>;
}

impl Ruminant for Animal {
    fn id(&self) -> AnimalId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn stomach_fill(&self) -> f64 {
        self.stomach_fill
    }

    fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        Animal::feed(self, quantity)
    }

    fn digest(&mut self) -> DomainResult<f64> {
        Animal::digest(self)
    }

    fn age_one_year(&mut self) -> DomainResult<()> {
        Animal::age_one_year(self)
    }
}

impl Ruminant for DairyAnimal {
    fn id(&self) -> AnimalId {
        self.animal.id
    }

    fn name(&self) -> &str {
        &self.animal.name
    }

    fn weight(&self) -> f64 {
        self.animal.weight
    }

    fn age(&self) -> u32 {
        self.animal.age
    }

    fn stomach_fill(&self) -> f64 {
        self.animal.stomach_fill
    }

    fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        DairyAnimal::feed(self, quantity)
    }

    fn digest(&mut self) -> DomainResult<f64> {
        DairyAnimal::digest(self)
    }

    fn age_one_year(&mut self) -> DomainResult<()> {
        DairyAnimal::age_one_year(self)
    }
}

impl Ruminant for SpottedDairyAnimal {
    fn id(&self) -> AnimalId {
        self.dairy.animal.id
    }

    fn name(&self) -> &str {
        &self.dairy.animal.name
    }

    fn weight(&self) -> f64 {
        self.dairy.animal.weight
    }

    fn age(&self) -> u32 {
        self.dairy.animal.age
    }

    fn stomach_fill(&self) -> f64 {
        self.dairy.animal.stomach_fill
    }

    fn feed(&mut self, quantity: f64) -> DomainResult<()> {
        SpottedDairyAnimal::feed(self, quantity)
    }

    fn feed_typed(&mut self, quantity: f64, feed: Feed) -> DomainResult<()> {
        SpottedDairyAnimal::feed_typed(self, quantity, feed)
    }

    fn digest(&mut self) -> DomainResult<f64> {
        SpottedDairyAnimal::digest(self)
    }

    fn age_one_year(&mut self) -> DomainResult<()> {
        SpottedDairyAnimal::age_one_year(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::IdSequence;

    fn herd(ids: &IdSequence) -> Vec<Box<dyn Ruminant>> {
        vec![
            Box::new(Animal::new(ids, "Hector".to_string(), 320.0, 3).unwrap()),
            Box::new(DairyAnimal::new(ids, "Lola".to_string(), 500.0, 5).unwrap()),
            Box::new(SpottedDairyAnimal::new(ids, "Bella".to_string(), 520.0, 6, 12, 18).unwrap()),
        ]
    }

    #[test]
    fn test_accessors_reach_the_shared_state() {
        let ids = IdSequence::new();
        let herd = herd(&ids);
        assert_eq!(herd[0].name(), "Hector");
        assert_eq!(herd[1].weight(), 500.0);
        assert_eq!(herd[2].age(), 6);
        assert_eq!(herd[2].id().value(), 3);
        assert_eq!(herd[0].stomach_fill(), 0.0);
    }

    #[test]
    fn test_each_variant_digests_with_its_own_rule() {
        let ids = IdSequence::new();
        let mut herd = herd(&ids);
        for animal in herd.iter_mut() {
            animal.feed(10.0).unwrap();
        }
        herd[2].feed_typed(2.0, Feed::Grass).unwrap();

        assert_eq!(herd[0].digest().unwrap(), 2.5);
        assert_eq!(herd[1].digest().unwrap(), 11.0);
        assert_eq!(herd[2].digest().unwrap(), 2.2);

        assert_eq!(herd[0].weight(), 322.5);
        assert_eq!(herd[1].weight(), 500.0);
        assert_eq!(herd[2].weight(), 520.0);
    }

    #[test]
    fn test_typed_feed_is_refused_except_on_the_spotted_variant() {
        let ids = IdSequence::new();
        let mut herd = herd(&ids);
        assert!(herd[0].feed_typed(2.0, Feed::Hay).is_err());
        assert!(herd[1].feed_typed(2.0, Feed::Hay).is_err());
        assert!(herd[2].feed_typed(2.0, Feed::Hay).is_ok());

        assert_eq!(herd[0].stomach_fill(), 0.0);
        assert_eq!(herd[1].stomach_fill(), 0.0);
        assert_eq!(herd[2].stomach_fill(), 2.0);
    }

    #[test]
    fn test_refused_typed_feed_names_the_rule() {
        let ids = IdSequence::new();
        let mut cow = DairyAnimal::new(&ids, "Lola".to_string(), 500.0, 5).unwrap();
        let error = Ruminant::feed_typed(&mut cow, 2.0, Feed::Cereal).unwrap_err();
        assert!(error.to_string().contains("typed feed"));
    }

    #[test]
    fn test_the_whole_herd_ages_together() {
        let ids = IdSequence::new();
        let mut herd = herd(&ids);
        for animal in herd.iter_mut() {
            animal.age_one_year().unwrap();
        }
        assert_eq!(herd[0].age(), 4);
        assert_eq!(herd[1].age(), 6);
        assert_eq!(herd[2].age(), 7);
    }

    #[test]
    fn test_shared_failures_surface_through_the_trait() {
        let ids = IdSequence::new();
        let mut herd = herd(&ids);
        for animal in herd.iter_mut() {
            assert!(animal.digest().is_err());
            assert!(animal.feed(-1.0).is_err());
        }
    }
}
