mod memory;
mod transaction;

pub use memory::*;
pub use transaction::*;

use crate::transfers::CompletedTransfer;
use crate::{Player, Team};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("player {0} not found")]
    PlayerNotFound(u32),

    #[error("team {0} not found")]
    TeamNotFound(u32),

    #[error("player {player_id} is not at team {expected_team_id}")]
    OwnershipConflict { player_id: u32, expected_team_id: u32 },

    #[error("team {0} cannot cover the debit")]
    InsufficientBalance(u32),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary of the league: players, teams and the transfer ledger,
/// keyed by integer ids. Reads return owned copies.
pub trait LeagueStore: Send + Sync {
    fn player(&self, player_id: u32) -> Option<Player>;

    fn players(&self) -> Vec<Player>;

    fn team(&self, team_id: u32) -> Option<Team>;

    fn team_by_user(&self, user_id: u32) -> Option<Team>;

    fn teams(&self) -> Vec<Team>;

    fn team_players(&self, team_id: u32) -> Vec<Player>;

    fn transfers(&self) -> Vec<CompletedTransfer>;

    /// Applies every mutation or none of them. Returns the recorded transfers with their ids.
    fn commit(&self, transaction: LeagueTransaction) -> Result<Vec<CompletedTransfer>, StoreError>;

    fn computer_teams(&self) -> Vec<Team> {
        self.teams().into_iter().filter(|t| t.is_computer()).collect()
    }
}
