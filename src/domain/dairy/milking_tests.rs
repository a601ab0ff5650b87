// src/domain/dairy/milking_tests.rs
//
// Rumination, milking and capacity behavior of DairyAnimal.

use crate::domain::dairy::DairyAnimal;
use crate::domain::feed::Feed;
use crate::domain::identity::IdSequence;
use crate::domain::ruminant::Ruminant;

const EPSILON: f64 = 1e-9;

fn lola() -> DairyAnimal {
    let ids = IdSequence::new();
    DairyAnimal::new(&ids, "Lola".to_string(), 500.0, 5).unwrap()
}

fn lola_with_fill(stomach_fill: f64) -> DairyAnimal {
    let ids = IdSequence::new();
    DairyAnimal::with_stomach_fill(&ids, "Lola".to_string(), 500.0, 5, stomach_fill).unwrap()
}

fn feed_and_digest(cow: &mut DairyAnimal, quantity: f64) -> f64 {
    cow.feed(quantity).unwrap();
    cow.digest().unwrap()
}

#[test]
fn test_digestion_converts_the_load_into_milk() {
    let mut cow = lola_with_fill(10.0);
    let produced = cow.digest().unwrap();
    assert_eq!(produced, 11.0);
    assert_eq!(cow.milk_available(), 11.0);
    assert_eq!(cow.milk_total_produced(), 11.0);
    assert_eq!(cow.stomach_fill(), 0.0);
}

#[test]
fn test_digestion_does_not_change_the_weight() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    assert_eq!(cow.weight(), 500.0);
}

#[test]
fn test_digestion_on_empty_stomach_fails() {
    let mut cow = lola();
    assert!(cow.digest().is_err());
    assert_eq!(cow.milk_available(), 0.0);
}

#[test]
fn test_production_accumulates_across_cycles() {
    let mut cow = lola();
    feed_and_digest(&mut cow, 10.0);
    feed_and_digest(&mut cow, 4.0);
    let expected = DairyAnimal::MILK_YIELD * 14.0;
    assert!((cow.milk_available() - expected).abs() < EPSILON);
    assert!((cow.milk_total_produced() - expected).abs() < EPSILON);
}

#[test]
fn test_milking_returns_the_litres_drawn() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    let collected = cow.milk(3.0).unwrap();
    assert_eq!(collected, 3.0);
    assert_eq!(cow.milk_available(), 8.0);
    assert_eq!(cow.milk_total_milked(), 3.0);
}

#[test]
fn test_milking_more_than_available_fails() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    assert!(cow.milk(11.5).is_err());
    assert_eq!(cow.milk_available(), 11.0);
    assert_eq!(cow.milk_total_milked(), 0.0);
}

#[test]
fn test_milking_non_positive_quantities_fails() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    assert!(cow.milk(0.0).is_err());
    assert!(cow.milk(-1.0).is_err());
    assert!(cow.milk(f64::NAN).is_err());
    assert_eq!(cow.milk_available(), 11.0);
}

#[test]
fn test_milking_the_whole_store_empties_it() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    cow.milk(11.0).unwrap();
    assert_eq!(cow.milk_available(), 0.0);
    assert!(cow.milk(0.5).is_err());
}

#[test]
fn test_totals_track_production_and_milking_separately() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    cow.milk(2.0).unwrap();
    cow.milk(3.0).unwrap();
    assert_eq!(cow.milk_available(), 6.0);
    assert_eq!(cow.milk_total_milked(), 5.0);
    assert_eq!(cow.milk_total_produced(), 11.0);
}

#[test]
fn test_production_past_capacity_is_rejected_and_keeps_the_load() {
    let mut cow = lola();
    feed_and_digest(&mut cow, 30.0);
    assert_eq!(cow.milk_available(), 33.0);

    cow.feed(10.0).unwrap();
    assert!(cow.digest().is_err());
    assert_eq!(cow.stomach_fill(), 10.0);
    assert_eq!(cow.milk_available(), 33.0);
    assert_eq!(cow.milk_total_produced(), 33.0);
}

#[test]
fn test_production_reaching_capacity_exactly_is_allowed() {
    let mut cow = lola();
    feed_and_digest(&mut cow, 30.0);
    cow.milk(4.0).unwrap();
    let produced = feed_and_digest(&mut cow, 10.0);
    assert_eq!(produced, 11.0);
    assert_eq!(cow.milk_available(), DairyAnimal::MILK_CAPACITY);
}

#[test]
fn test_any_production_at_capacity_is_rejected() {
    let mut cow = lola();
    feed_and_digest(&mut cow, 30.0);
    cow.milk(4.0).unwrap();
    feed_and_digest(&mut cow, 10.0);

    cow.feed(0.1).unwrap();
    assert!(cow.digest().is_err());
    assert_eq!(cow.milk_available(), DairyAnimal::MILK_CAPACITY);
    assert_eq!(cow.stomach_fill(), 0.1);
}

#[test]
fn test_milking_frees_capacity_for_new_production() {
    let mut cow = lola();
    feed_and_digest(&mut cow, 30.0);
    cow.milk(4.0).unwrap();
    feed_and_digest(&mut cow, 10.0);
    assert_eq!(cow.milk_available(), DairyAnimal::MILK_CAPACITY);

    cow.milk(11.0).unwrap();
    let produced = feed_and_digest(&mut cow, 10.0);
    assert_eq!(produced, 11.0);
    assert_eq!(cow.milk_available(), DairyAnimal::MILK_CAPACITY);
}

#[test]
fn test_typed_feed_is_refused() {
    let mut cow = lola_with_fill(10.0);
    assert!(Ruminant::feed_typed(&mut cow, 2.0, Feed::Hay).is_err());
    assert_eq!(cow.stomach_fill(), 10.0);
}

#[test]
fn test_aging_is_shared_with_the_base_animal() {
    let mut cow = lola();
    cow.age_one_year().unwrap();
    assert_eq!(cow.age(), 6);
}

#[test]
fn test_display_appends_the_milk_state() {
    let mut cow = lola_with_fill(10.0);
    cow.digest().unwrap();
    cow.milk(3.0).unwrap();
    let text = cow.to_string();
    assert!(text.contains("Lola"));
    assert!(text.contains("8.0 L available"));
    assert!(text.contains("3.0 L milked"));
}
