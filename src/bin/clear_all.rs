use tracing::info;

use restaurant_seeder::types::{RESTAURANTS_COLLECTION, TABLES_COLLECTION};
use restaurant_seeder::{bootstrap, CollectionClearer, SeedResult};

fn main() -> SeedResult<()> {
    let (settings, mut store) = bootstrap()?;

    let mut clearer = CollectionClearer::new(&mut store, settings.page_size)?;
    for collection in [RESTAURANTS_COLLECTION, TABLES_COLLECTION] {
        clearer.clear(collection)?;
    }

    info!("Restaurants and tables collections cleared.");
    Ok(())
}
