mod config;

use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{MemoryStore, TransferDesk};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use web::{GameAppData, LeagueServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let league = DatabaseGenerator::generate(&database, config.seed).map_err(|e| eyre!(e))?;

    info!(
        "negotiation seed = {}, max rounds = {}",
        config.seed, config.settings.max_rounds
    );

    let desk = TransferDesk::new(
        MemoryStore::new(league),
        config.settings,
        StdRng::seed_from_u64(config.seed),
    );

    LeagueServer::new(GameAppData::new(desk), config.listen_addr)
        .run()
        .await?;

    Ok(())
}
