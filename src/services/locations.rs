use tracing::info;

use crate::db_models::Location;
use crate::services::store::DocumentStore;
use crate::types::{SeedResult, LOCATIONS_COLLECTION};

pub const LOCATIONS: [&str; 10] = [
    "Kumarapuram", "Medical College", "Pattom", "Panampilly Nagar", "Alappuzha",
    "Cochin", "Vyttila", "Edapally", "Fort Kochi", "Kochi",
];

/// Writes one `locations` document per entry of [`LOCATIONS`], keyed by 1-based position.
pub fn seed_locations<S: DocumentStore>(store: &mut S) -> SeedResult<Vec<Location>> {
    let mut written = Vec::with_capacity(LOCATIONS.len());

    for (i, name) in LOCATIONS.iter().enumerate() {
        let location = Location { id: (i + 1).to_string(), name: (*name).to_owned() };
        store.write(LOCATIONS_COLLECTION, &location.id, &serde_json::to_value(&location)?)?;
        info!("Added location: {}", location.name);
        written.push(location);
    }

    info!("All locations added successfully!");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::MemoryStore;
    use crate::types::SeedError;

    #[test]
    fn reseeding_replaces_documents() {
        let mut store = MemoryStore::new();
        seed_locations(&mut store).unwrap();
        seed_locations(&mut store).unwrap();

        assert_eq!(store.len(LOCATIONS_COLLECTION), LOCATIONS.len());
        assert_eq!(store.write_calls, 2 * LOCATIONS.len());
    }

    #[test]
    fn write_failure_stops_seeding() {
        let mut store = MemoryStore::new();
        store.fail_write_at(4);

        assert!(matches!(seed_locations(&mut store), Err(SeedError::StoreOperation(_))));
        assert_eq!(store.len(LOCATIONS_COLLECTION), 3);
    }
}
