use std::collections::HashSet;

use chrono::Timelike;
use rand::rngs::StdRng;
use rand::SeedableRng;

use restaurant_seeder::db_models::{Location, Restaurant, SlotStatus};
use restaurant_seeder::services::generator::time_slots;
use restaurant_seeder::services::locations::LOCATIONS;
use restaurant_seeder::services::names::NAME_POOL;
use restaurant_seeder::types::{LOCATIONS_COLLECTION, RESTAURANTS_COLLECTION};
use restaurant_seeder::{seed_locations, CollectionClearer, DataGenerator, GeneratorConfig, MemoryStore, SeedError};

fn stored_restaurants(store: &MemoryStore) -> Vec<Restaurant> {
    store
        .documents(RESTAURANTS_COLLECTION)
        .into_iter()
        .map(|(_, value)| serde_json::from_value(value.clone()).unwrap())
        .collect()
}

#[test]
fn generates_full_batch_of_restaurants() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(2024);

    let generated = DataGenerator::new(&mut store, &mut rng, GeneratorConfig::default()).generate().unwrap();
    assert_eq!(generated.len(), 100);
    assert_eq!(store.len(RESTAURANTS_COLLECTION), 100);

    let ids: HashSet<String> = generated.iter().map(|r| r.id.clone()).collect();
    let expected: HashSet<String> = (1..=100).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);

    let names: HashSet<&str> = generated.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 100);

    for restaurant in stored_restaurants(&store) {
        assert!(NAME_POOL.contains(&restaurant.name.as_str()));
        assert!((3.5..=5.0).contains(&restaurant.rating));
        assert_eq!(restaurant.tables.len(), 10);

        let monday = restaurant.opening_hours.monday;
        let slots = time_slots(monday.open.hour(), monday.close.hour());
        assert!(!slots.is_empty());

        let table_ids: HashSet<&str> = restaurant.tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(table_ids.len(), 10);
        for table in &restaurant.tables {
            assert!(table.id.starts_with(&format!("{}_", restaurant.id)));
            assert_eq!(table.time_slots, slots);
            assert!(table.time_slots.iter().all(|slot| slot.status == SlotStatus::Available));
        }
    }
}

#[test]
fn documents_are_keyed_by_restaurant_id() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(5);
    let config = GeneratorConfig { restaurant_count: 3, tables_per_restaurant: 2 };

    DataGenerator::new(&mut store, &mut rng, config).generate().unwrap();

    for (key, value) in store.documents(RESTAURANTS_COLLECTION) {
        assert_eq!(value["id"], key);
        assert_eq!(value["tables"].as_array().unwrap().len(), 2);
        assert!(value["openingHours"]["monday"]["open"].is_string());
        assert!(value["tables"][0]["timeSlots"].is_array());
    }
}

#[test]
fn oversized_batch_fails_before_any_write() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(9);
    let config = GeneratorConfig { restaurant_count: NAME_POOL.len() + 1, tables_per_restaurant: 10 };

    let err = DataGenerator::new(&mut store, &mut rng, config).generate().unwrap_err();

    assert!(matches!(err, SeedError::AllocationExhausted { .. }));
    assert_eq!(store.write_calls, 0);
}

#[test]
fn reseed_after_clear_replaces_everything() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(77);

    DataGenerator::new(&mut store, &mut rng, GeneratorConfig::default()).generate().unwrap();
    CollectionClearer::with_default_page_size(&mut store).clear(RESTAURANTS_COLLECTION).unwrap();
    assert!(store.is_empty(RESTAURANTS_COLLECTION));

    let config = GeneratorConfig { restaurant_count: 20, tables_per_restaurant: 5 };
    DataGenerator::new(&mut store, &mut rng, config).generate().unwrap();
    assert_eq!(store.len(RESTAURANTS_COLLECTION), 20);
}

#[test]
fn write_failure_aborts_generation() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(1);
    store.fail_write_at(11);

    let err = DataGenerator::new(&mut store, &mut rng, GeneratorConfig::default()).generate().unwrap_err();

    assert!(matches!(err, SeedError::StoreOperation(_)));
    assert_eq!(store.len(RESTAURANTS_COLLECTION), 10);
}

#[test]
fn seeds_fixed_location_list_in_order() {
    let mut store = MemoryStore::new();

    let written = seed_locations(&mut store).unwrap();

    assert_eq!(written.len(), 10);
    assert_eq!(store.len(LOCATIONS_COLLECTION), 10);
    for (i, name) in LOCATIONS.iter().enumerate() {
        let id = (i + 1).to_string();
        assert_eq!(written[i], Location { id: id.clone(), name: (*name).to_owned() });

        let stored: Location = serde_json::from_value(store.get(LOCATIONS_COLLECTION, &id).unwrap().clone()).unwrap();
        assert_eq!(stored.name, *name);
        assert_eq!(stored.id, id);
    }
}
