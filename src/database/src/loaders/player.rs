use league_core::{PlayerPositionType, PlayerSkills};
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub position: PlayerPositionType,
    pub age: Option<u8>,
    pub team_id: Option<u32>,
    #[serde(default)]
    pub skills: PlayerSkills,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Result<Vec<PlayerEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_PLAYERS_JSON)
    }
}
