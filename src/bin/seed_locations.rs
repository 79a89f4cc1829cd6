use restaurant_seeder::{bootstrap, seed_locations, SeedResult};

fn main() -> SeedResult<()> {
    let (_, mut store) = bootstrap()?;
    seed_locations(&mut store)?;

    Ok(())
}
