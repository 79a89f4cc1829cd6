use chrono::{NaiveTime, Timelike};
use rand::Rng;
use tracing::info;

use crate::db_models::{
    DayHours, OpeningHours, Price, Restaurant, RestaurantStatus, SlotStatus, Table, TimeSlot,
};
use crate::services::db_utils::Settings;
use crate::services::locations::LOCATIONS;
use crate::services::names::allocate_names;
use crate::services::store::DocumentStore;
use crate::types::{SeedResult, RESTAURANTS_COLLECTION};

pub const FEATURES: [[&str; 2]; 10] = [
    ["Italian", "Pasta"], ["Japanese", "Sushi"], ["American", "Burgers"], ["Indian", "Curry"],
    ["Steak", "Grill"], ["Mexican", "Tacos"], ["Chinese", "Dim Sum"], ["Italian", "Pizza"],
    ["Asian", "Noodles"], ["American", "BBQ"],
];
pub const STATUSES: [RestaurantStatus; 2] = [RestaurantStatus::Busy, RestaurantStatus::Free];
pub const PRICES: [Price; 3] = [Price::Cheap, Price::Moderate, Price::Expensive];
pub const ADJECTIVES: [&str; 4] = ["authentic", "fusion", "gourmet", "local"];
pub const SEAT_COUNTS: [u32; 3] = [2, 4, 6];

pub const OPEN_HOURS: (u32, u32) = (8, 11);
pub const CLOSE_HOURS: (u32, u32) = (20, 23);

const IMAGE_BASE_URL: &str = "https://source.unsplash.com/400x300/?restaurant,";

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Each weekday sampled on its own: open in 08..=11, close in 20..=23.
pub fn opening_hours<R: Rng + ?Sized>(rng: &mut R) -> OpeningHours {
    let mut day = || DayHours {
        open: on_the_hour(rng.gen_range(OPEN_HOURS.0..=OPEN_HOURS.1)),
        close: on_the_hour(rng.gen_range(CLOSE_HOURS.0..=CLOSE_HOURS.1)),
    };

    OpeningHours {
        monday: day(),
        tuesday: day(),
        wednesday: day(),
        thursday: day(),
        friday: day(),
        saturday: day(),
        sunday: day(),
    }
}

/// One available slot per hour in `[open_hour, close_hour)`. Empty when the
/// range is empty; hours past the end of the day produce nothing.
pub fn time_slots(open_hour: u32, close_hour: u32) -> Vec<TimeSlot> {
    (open_hour..close_hour)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .map(|time| TimeSlot { time, status: SlotStatus::Available })
        .collect()
}

pub fn image_url(name: &str) -> String {
    format!("{IMAGE_BASE_URL}{}", name.replace(' ', "%20"))
}

/// Builds restaurant number `index` (1-based). Every table shares the slots
/// derived from Monday's hours.
pub fn restaurant<R: Rng + ?Sized>(rng: &mut R, index: usize, name: String, table_count: usize) -> Restaurant {
    let opening_hours = opening_hours(rng);
    let monday = &opening_hours.monday;
    let slots = time_slots(monday.open.hour(), monday.close.hour());

    let tables = (1..=table_count)
        .map(|j| Table {
            id: format!("{index}_{j}"),
            seats: *pick(rng, &SEAT_COUNTS),
            time_slots: slots.clone(),
        })
        .collect();

    Restaurant {
        id: index.to_string(),
        image: image_url(&name),
        name,
        rating: (rng.gen_range(3.5..=5.0_f64) * 10.0).round() / 10.0,
        features: pick(rng, &FEATURES).iter().map(|f| (*f).to_owned()).collect(),
        price: *pick(rng, &PRICES),
        status: *pick(rng, &STATUSES),
        description: format!("A cozy restaurant serving {} cuisine.", pick(rng, &ADJECTIVES)),
        location: (*pick(rng, &LOCATIONS)).to_owned(),
        tables,
        opening_hours,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub restaurant_count: usize,
    pub tables_per_restaurant: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { restaurant_count: 100, tables_per_restaurant: 10 }
    }
}

impl From<&Settings> for GeneratorConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            restaurant_count: settings.restaurant_count,
            tables_per_restaurant: settings.tables_per_restaurant,
        }
    }
}

pub struct DataGenerator<'a, S: DocumentStore, R: Rng + ?Sized> {
    store: &'a mut S,
    rng: &'a mut R,
    config: GeneratorConfig,
}

impl<'a, S: DocumentStore, R: Rng + ?Sized> DataGenerator<'a, S, R> {
    pub fn new(store: &'a mut S, rng: &'a mut R, config: GeneratorConfig) -> Self {
        Self { store, rng, config }
    }

    /// Writes `restaurant_count` restaurants keyed `"1"..`. Names are allocated
    /// before the first write, so an oversized request writes nothing.
    pub fn generate(&mut self) -> SeedResult<Vec<Restaurant>> {
        let names = allocate_names(&mut *self.rng, self.config.restaurant_count)?;
        let mut restaurants = Vec::with_capacity(names.len());

        for (i, name) in names.into_iter().enumerate() {
            let restaurant = restaurant(&mut *self.rng, i + 1, name, self.config.tables_per_restaurant);

            self.store.write(RESTAURANTS_COLLECTION, &restaurant.id, &serde_json::to_value(&restaurant)?)?;
            info!("Added restaurant: {} at {}", restaurant.name, restaurant.location);

            restaurants.push(restaurant);
        }

        info!("Database populated successfully!");
        Ok(restaurants)
    }
}
