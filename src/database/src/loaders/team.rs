use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    // set for rosters managed by a league member
    pub user_id: Option<u32>,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub balance: i64,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<Vec<TeamEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_TEAMS_JSON)
    }
}
