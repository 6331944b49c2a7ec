//! Seed script - fills the local workout store with generated workouts
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! Honors the server's `WORKOUTS_STORE_PATH` and `WORKOUTS_STORE_KEY`, plus
//! `SEED_COUNT`, `SEED_RUNNING_SHARE` and `SEED_RESET`.

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;
use workouts::{config::AppConfig, open_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_config = AppConfig::from_env();
    let seed = SeedConfig::from_env();

    let mut store = open_store(&app_config).await?;
    tracing::info!("Opened store at {}", app_config.store_path);

    if seed.reset_first {
        store.reset().await?;
        tracing::info!("Removed existing workouts");
    }

    let mut rng = StdRng::seed_from_u64(12345); // Reproducible data
    let generator = WorkoutGenerator::new(seed.region);

    let mut runs = 0;
    let mut rides = 0;
    for input in generator.generate_mix(seed.workout_count, seed.running_share, &mut rng) {
        match store.create(input).await?.kind() {
            WorkoutKind::Running => runs += 1,
            WorkoutKind::Cycling => rides += 1,
        }
    }

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Runs: {runs}");
    tracing::info!("  Rides: {rides}");
    tracing::info!("  Total stored: {}", store.len());

    Ok(())
}
