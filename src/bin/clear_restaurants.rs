use restaurant_seeder::types::RESTAURANTS_COLLECTION;
use restaurant_seeder::{bootstrap, CollectionClearer, SeedResult};

fn main() -> SeedResult<()> {
    let (settings, mut store) = bootstrap()?;
    CollectionClearer::new(&mut store, settings.page_size)?.clear(RESTAURANTS_COLLECTION)?;

    Ok(())
}
