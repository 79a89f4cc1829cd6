use restaurant_seeder::{bootstrap, DataGenerator, GeneratorConfig, SeedResult};

fn main() -> SeedResult<()> {
    let (settings, mut store) = bootstrap()?;

    let mut rng = rand::thread_rng();
    DataGenerator::new(&mut store, &mut rng, GeneratorConfig::from(&settings)).generate()?;

    Ok(())
}
