use crate::store::{LeagueMutation, LeagueStore, LeagueTransaction, StoreError};
use crate::transfers::CompletedTransfer;
use crate::{Player, Team};
use log::debug;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub teams: BTreeMap<u32, Team>,
    pub players: BTreeMap<u32, Player>,
    pub transfers: Vec<CompletedTransfer>,
}

impl LeagueData {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        LeagueData {
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            transfers: Vec::new(),
        }
    }
}

pub struct MemoryStore {
    data: RwLock<LeagueData>,
}

impl MemoryStore {
    pub fn new(data: LeagueData) -> Self {
        MemoryStore {
            data: RwLock::new(data),
        }
    }
}

/// Copies of the entities a transaction touches. Nothing reaches the store until every
/// mutation has been applied here.
struct StagedChanges<'d> {
    data: &'d LeagueData,
    players: HashMap<u32, Player>,
    teams: HashMap<u32, Team>,
    transfers: Vec<CompletedTransfer>,
}

impl<'d> StagedChanges<'d> {
    fn new(data: &'d LeagueData) -> Self {
        StagedChanges {
            data,
            players: HashMap::new(),
            teams: HashMap::new(),
            transfers: Vec::new(),
        }
    }

    fn player(&mut self, player_id: u32) -> Result<&mut Player, StoreError> {
        if !self.players.contains_key(&player_id) {
            let player = self
                .data
                .players
                .get(&player_id)
                .ok_or(StoreError::PlayerNotFound(player_id))?;
            self.players.insert(player_id, player.clone());
        }

        self.players
            .get_mut(&player_id)
            .ok_or(StoreError::PlayerNotFound(player_id))
    }

    fn team(&mut self, team_id: u32) -> Result<&mut Team, StoreError> {
        if !self.teams.contains_key(&team_id) {
            let team = self
                .data
                .teams
                .get(&team_id)
                .ok_or(StoreError::TeamNotFound(team_id))?;
            self.teams.insert(team_id, team.clone());
        }

        self.teams
            .get_mut(&team_id)
            .ok_or(StoreError::TeamNotFound(team_id))
    }

    fn apply(&mut self, mutation: LeagueMutation) -> Result<(), StoreError> {
        match mutation {
            LeagueMutation::MovePlayer {
                player_id,
                from_team_id,
                to_team_id,
            } => {
                self.team(to_team_id)?;

                let player = self.player(player_id)?;
                if !player.belongs_to(from_team_id) {
                    return Err(StoreError::OwnershipConflict {
                        player_id,
                        expected_team_id: from_team_id,
                    });
                }

                player.team_id = Some(to_team_id);
            }
            LeagueMutation::Credit { team_id, amount } => {
                let team = self.team(team_id)?;
                let name = team.name.clone();
                team.finance.add_transfer_income(&name, amount);
            }
            LeagueMutation::Debit { team_id, amount } => {
                let team = self.team(team_id)?;
                if !team.can_afford(amount) {
                    return Err(StoreError::InsufficientBalance(team_id));
                }

                let name = team.name.clone();
                team.finance.spend_on_transfer(&name, amount);
            }
            LeagueMutation::SetMarketValue { player_id, value } => {
                self.player(player_id)?.market_value = value;
            }
            LeagueMutation::RecordTransfer(transfer) => {
                self.transfers.push(transfer);
            }
        }

        Ok(())
    }
}

impl LeagueStore for MemoryStore {
    fn player(&self, player_id: u32) -> Option<Player> {
        self.data.read().players.get(&player_id).cloned()
    }

    fn players(&self) -> Vec<Player> {
        self.data.read().players.values().cloned().collect()
    }

    fn team(&self, team_id: u32) -> Option<Team> {
        self.data.read().teams.get(&team_id).cloned()
    }

    fn team_by_user(&self, user_id: u32) -> Option<Team> {
        self.data
            .read()
            .teams
            .values()
            .find(|t| t.is_owned_by(user_id))
            .cloned()
    }

    fn teams(&self) -> Vec<Team> {
        self.data.read().teams.values().cloned().collect()
    }

    fn team_players(&self, team_id: u32) -> Vec<Player> {
        self.data
            .read()
            .players
            .values()
            .filter(|p| p.belongs_to(team_id))
            .cloned()
            .collect()
    }

    fn transfers(&self) -> Vec<CompletedTransfer> {
        self.data.read().transfers.clone()
    }

    fn commit(&self, transaction: LeagueTransaction) -> Result<Vec<CompletedTransfer>, StoreError> {
        if transaction.is_empty() {
            return Ok(Vec::new());
        }

        debug!("store: committing {} mutations", transaction.mutations().len());

        let mut data = self.data.write();

        // Pass 1: stage every mutation against copies
        let mut staged = StagedChanges::new(&data);
        for mutation in transaction.into_mutations() {
            staged.apply(mutation)?;
        }

        let StagedChanges {
            players,
            teams,
            transfers,
            ..
        } = staged;

        // Pass 2: publish
        data.players.extend(players);
        data.teams.extend(teams);

        let mut recorded = Vec::with_capacity(transfers.len());
        for mut transfer in transfers {
            transfer.id = data.transfers.len() as u32 + 1;
            data.transfers.push(transfer.clone());
            recorded.push(transfer);
        }

        Ok(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CurrencyValue;

    fn store() -> MemoryStore {
        let teams = vec![
            Team::user(1, "Galindro FC", 10, 5_000_000),
            Team::computer(2, "Valencia C.F.", 0),
        ];
        let players = vec![
            Player::builder().id(1).name("Ruiz").team_id(1).build().unwrap(),
            Player::builder().id(2).name("Baros").team_id(2).build().unwrap(),
        ];

        MemoryStore::new(LeagueData::new(teams, players))
    }

    #[test]
    fn test_commit_applies_everything() {
        let store = store();

        let transaction = LeagueTransaction::new()
            .move_player(2, 2, 1)
            .debit(1, CurrencyValue::eur(2_000_000))
            .credit(2, CurrencyValue::eur(2_000_000));

        store.commit(transaction).unwrap();

        assert!(store.player(2).unwrap().belongs_to(1));
        assert_eq!(store.team(1).unwrap().finance.balance, 3_000_000);
        assert_eq!(store.team(2).unwrap().finance.balance, 2_000_000);
        assert_eq!(store.team_players(1).len(), 2);
    }

    #[test]
    fn test_failed_commit_leaves_state_untouched() {
        let store = store();

        let transaction = LeagueTransaction::new()
            .move_player(2, 2, 1)
            .credit(2, CurrencyValue::eur(6_000_000))
            .debit(1, CurrencyValue::eur(6_000_000));

        let result = store.commit(transaction);

        assert_eq!(result.unwrap_err(), StoreError::InsufficientBalance(1));
        assert!(store.player(2).unwrap().belongs_to(2));
        assert_eq!(store.team(1).unwrap().finance.balance, 5_000_000);
        assert_eq!(store.team(2).unwrap().finance.balance, 0);
    }

    #[test]
    fn test_move_requires_current_owner() {
        let store = store();

        let result = store.commit(LeagueTransaction::new().move_player(1, 2, 1));

        assert_eq!(
            result.unwrap_err(),
            StoreError::OwnershipConflict {
                player_id: 1,
                expected_team_id: 2
            }
        );
    }

    #[test]
    fn test_team_by_user() {
        let store = store();

        assert_eq!(store.team_by_user(10).unwrap().id, 1);
        assert!(store.team_by_user(11).is_none());
        assert_eq!(store.computer_teams().len(), 1);
    }
}
