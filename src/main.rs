use tracing::info;

use restaurant_seeder::types::RESTAURANTS_COLLECTION;
use restaurant_seeder::{bootstrap, CollectionClearer, DataGenerator, GeneratorConfig, SeedResult};

/// Fresh reseed: clear `restaurants`, then generate a new batch.
fn main() -> SeedResult<()> {
    let (settings, mut store) = bootstrap()?;

    info!("Deleting existing documents in the '{RESTAURANTS_COLLECTION}' collection...");
    CollectionClearer::new(&mut store, settings.page_size)?.clear(RESTAURANTS_COLLECTION)?;
    info!("All documents deleted successfully.");

    let mut rng = rand::thread_rng();
    DataGenerator::new(&mut store, &mut rng, GeneratorConfig::from(&settings)).generate()?;

    Ok(())
}
