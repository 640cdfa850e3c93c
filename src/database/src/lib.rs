mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use log::info;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
    pub players: Vec<PlayerEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        let teams = TeamLoader::load()?;
        let players = PlayerLoader::load()?;

        info!(
            "database loaded: teams = {}, players = {}",
            teams.len(),
            players.len()
        );

        Ok(DatabaseEntity { teams, players })
    }
}
