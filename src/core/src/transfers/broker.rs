use crate::Team;
use rand::RngExt;

/// Bids collected for one of the user's players. Every proposal in the batch is its own session;
/// the batch is the single lookup from player to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SellBatch {
    pub user_id: u32,
    pub player_id: u32,
    pub proposal_ids: Vec<u32>,
}

impl SellBatch {
    pub fn new(user_id: u32, player_id: u32) -> Self {
        SellBatch {
            user_id,
            player_id,
            proposal_ids: Vec::new(),
        }
    }

    pub fn contains(&self, proposal_id: u32) -> bool {
        self.proposal_ids.contains(&proposal_id)
    }

    pub fn siblings(&self, proposal_id: u32) -> impl Iterator<Item = u32> + '_ {
        self.proposal_ids
            .iter()
            .copied()
            .filter(move |id| *id != proposal_id)
    }

    /// Starts a new round of bids. Returns the ids it replaces.
    pub fn replace(&mut self, user_id: u32, proposal_ids: Vec<u32>) -> Vec<u32> {
        self.user_id = user_id;
        std::mem::replace(&mut self.proposal_ids, proposal_ids)
    }
}

pub struct SellBroker;

impl SellBroker {
    /// Draws up to `count` distinct clubs from `clubs`.
    pub fn pick_bidders<R: RngExt>(rng: &mut R, mut clubs: Vec<Team>, count: usize) -> Vec<Team> {
        let mut bidders = Vec::with_capacity(count.min(clubs.len()));

        while bidders.len() < count && !clubs.is_empty() {
            let idx = rng.random_range(0..clubs.len());
            bidders.push(clubs.swap_remove(idx));
        }

        bidders
    }
}
