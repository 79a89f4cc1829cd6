use rand::seq::index;
use rand::Rng;

use crate::types::{SeedError, SeedResult};

/// Curated restaurant names. Entries are pairwise distinct.
pub const NAME_POOL: [&str; 112] = [
    "Pasta Palace", "Sushi Sensation", "Burger Bonanza", "Curry Express", "Steakhouse Supreme",
    "Taco Tower", "Dim Sum Delights", "Pizza Planet", "Noodle Nirvana", "BBQ Haven",
    "Ramen Retreat", "Grill Garden", "Burrito Bazaar", "Waffle Wonderland", "Fried Feast",
    "Crispy Corner", "Pasta Place", "Sushi Shack", "Burger Barn", "Curry Kingdom", "Steak Street",
    "Taco Town", "Dim Sum Den", "Pizza Plaza", "Noodle Nook", "BBQ Bistro", "Ramen Realm",
    "Grill Groove", "Burrito Bay", "Waffle World", "Fried Fantasy", "Crispy Castle", "Pasta Parade",
    "Sushi Symphony", "Burger Block", "Curry Cabin", "Steak Spot", "Taco Trail", "Dim Sum Delight",
    "Pizza Pavilion", "Noodle Nest", "BBQ Bar", "Ramen Roost", "Grill Glory", "Burrito Blast",
    "Waffle Works", "Fried Fortress", "Crispy Cuisine", "Sushi Super", "Burger Break",
    "Curry Charm", "Steak Suite", "Taco Temple", "Dim Sum Dynasty", "Pizza Peak", "BBQ Boulevard",
    "Ramen Ranch", "Grill Grove", "Burrito Branch", "Waffle Wharf", "Fried Field",
    "Crispy Creations", "Pasta Pavilion", "Sushi Set", "Burger Basin", "Curry Cove", "Steak Stand",
    "Taco Tides", "Dim Sum Domain", "Noodle Nexus", "BBQ Bend", "Ramen River", "Grill Gateway",
    "Burrito Bayou", "Waffle Wilderness", "Pasta Point", "Sushi Shores", "Burger Bluff",
    "Curry Canyon", "Steak Station", "Dim Sum District", "Pizza Paradise", "BBQ Belt", "Ramen Rise",
    "Fried Farm", "Crispy Cupboard", "Sushi Space", "Burger Box", "Curry City", "Steak Shack",
    "Taco Track", "Pizza Point", "BBQ Blast", "Grill Grotto", "Burrito Barracks", "Fried Factory",
    "Crispy Coast", "Pasta Piazza", "Sushi Spot", "Burger Bistro", "Curry Corner", "Taco Terrace",
    "Dim Sum Dock", "Pizza Port", "Noodle Nation", "Ramen Row", "Grill Gallery", "Burrito Bistro",
    "Waffle Walk", "Fried Fiesta", "Crispy Crown", "Steak Summit",
];

/// `n` distinct names from [`NAME_POOL`], in random order.
pub fn allocate_names<R: Rng + ?Sized>(rng: &mut R, n: usize) -> SeedResult<Vec<String>> {
    allocate_from(rng, &NAME_POOL, n)
}

/// Samples `n` entries of `pool` without replacement. Fails up front when the
/// pool is too small, so callers can check before touching the store.
pub fn allocate_from<R: Rng + ?Sized>(rng: &mut R, pool: &[&str], n: usize) -> SeedResult<Vec<String>> {
    if n > pool.len() {
        return Err(SeedError::AllocationExhausted { requested: n, available: pool.len() });
    }

    Ok(index::sample(rng, pool.len(), n).into_iter().map(|i| pool[i].to_owned()).collect())
}
