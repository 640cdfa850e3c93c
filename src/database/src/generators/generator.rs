use crate::generators::PlayerGenerator;
use crate::loaders::TeamEntity;
use crate::DatabaseEntity;
use league_core::{LeagueData, Player, Team};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the initial league state. The same seed always yields the same contracts.
    pub fn generate(data: &DatabaseEntity, seed: u64) -> Result<LeagueData, String> {
        let teams = data.teams.iter().map(Self::generate_team).collect::<Vec<Team>>();

        let mut player_generator = PlayerGenerator::new(StdRng::seed_from_u64(seed));

        let players = data
            .players
            .iter()
            .map(|player| player_generator.generate(player))
            .collect::<Result<Vec<Player>, String>>()?;

        for player in &players {
            if let Some(team_id) = player.team_id {
                if !teams.iter().any(|t| t.id == team_id) {
                    return Err(format!("{} refers to unknown team {}", player, team_id));
                }
            }
        }

        info!(
            "league generated: user teams = {}, computer clubs = {}, players = {}",
            teams.iter().filter(|t| !t.is_computer()).count(),
            teams.iter().filter(|t| t.is_computer()).count(),
            players.len()
        );

        Ok(LeagueData::new(teams, players))
    }

    fn generate_team(entity: &TeamEntity) -> Team {
        match entity.user_id {
            Some(user_id) => Team::user(entity.id, entity.name.clone(), user_id, entity.budget),
            None => Team::computer(entity.id, entity.name.clone(), entity.balance),
        }
    }
}
