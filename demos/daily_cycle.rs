use herdbook::{Animal, DairyAnimal, Feed, IdSequence, Ruminant, SpottedDairyAnimal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ids = IdSequence::new();

    let mut hector = Animal::new(&ids, "Hector".to_string(), 320.0, 3)?;
    let mut lola = DairyAnimal::new(&ids, "Lola".to_string(), 500.0, 5)?;
    let mut bella = SpottedDairyAnimal::new(&ids, "Bella".to_string(), 520.0, 6, 12, 18)?;

    // Morning: the whole herd grazes through the shared surface
    let herd: Vec<&mut dyn Ruminant> = vec![&mut hector, &mut lola, &mut bella];
    for animal in herd {
        animal.feed(8.0)?;
    }

    // Bella gets a typed ration on top of the morning grazing
    bella.feed_typed(2.0, Feed::Grass)?;
    bella.feed_typed(1.0, Feed::Cereal)?;

    // Evening: digestion converts each stomach with the variant's own rule
    let gain = hector.digest()?;
    println!("{} gained {:.2} kg", hector.name(), gain);

    let produced = lola.digest()?;
    println!("{} stored {:.2} L of milk", lola.name(), produced);

    let produced = bella.digest()?;
    println!("{} stored {:.2} L from her ration", bella.name(), produced);

    // Milking draws the stores back down
    let collected = lola.milk(3.0)?;
    println!("Collected {:.2} L from {}", collected, lola.name());

    let collected = bella.milk(1.0)?;
    println!("Collected {:.2} L from {}", collected, bella.name());

    // Season's end: everyone ages a year
    hector.age_one_year()?;
    lola.age_one_year()?;
    bella.age_one_year()?;

    println!("After the cycle:");
    println!("  {}", hector);
    println!("  {}", lola);
    println!("  {}", bella);

    Ok(())
}
