use restaurant_seeder::types::TABLES_COLLECTION;
use restaurant_seeder::{bootstrap, CollectionClearer, SeedResult};

/// Clears the legacy flat `tables` collection.
fn main() -> SeedResult<()> {
    let (settings, mut store) = bootstrap()?;
    CollectionClearer::new(&mut store, settings.page_size)?.clear(TABLES_COLLECTION)?;

    Ok(())
}
