use crate::shared::CurrencyValue;
use crate::{Player, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealDirection {
    UserBuys,
    UserSells,
}

/// A player thrown into the deal instead of part of the cash.
/// On a buy the user gives them away, on a sale the user receives them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapPlayer {
    pub player_id: u32,
    pub name: String,
    pub market_value: CurrencyValue,
}

impl From<&Player> for SwapPlayer {
    fn from(player: &Player) -> Self {
        SwapPlayer {
            player_id: player.id,
            name: player.name.clone(),
            market_value: player.market_value,
        }
    }
}

/// The negotiable part of a proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealTerms {
    pub cash: CurrencyValue,
    pub player_swap: Option<SwapPlayer>,
}

impl DealTerms {
    pub fn cash_only(cash: CurrencyValue) -> Self {
        DealTerms {
            cash,
            player_swap: None,
        }
    }

    pub fn with_swap(cash: CurrencyValue, player: &Player) -> Self {
        DealTerms {
            cash,
            player_swap: Some(SwapPlayer::from(player)),
        }
    }

    pub fn total_value(&self) -> CurrencyValue {
        let swap_value = self
            .player_swap
            .as_ref()
            .map(|p| p.market_value)
            .unwrap_or_default();

        self.cash + swap_value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counterpart {
    pub team_id: u32,
    pub name: String,
}

impl From<&Team> for Counterpart {
    fn from(team: &Team) -> Self {
        Counterpart {
            team_id: team.id,
            name: team.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealProposal {
    pub id: u32,
    /// Bumped on every revision so stale client copies can be told apart.
    pub revision: u32,
    pub direction: DealDirection,
    pub player_id: u32,
    pub player_name: String,
    pub player_market_value: CurrencyValue,
    pub counterpart: Counterpart,
    #[serde(flatten)]
    pub terms: DealTerms,
}

impl DealProposal {
    pub fn new(
        id: u32,
        direction: DealDirection,
        player: &Player,
        counterpart: &Team,
        terms: DealTerms,
    ) -> Self {
        DealProposal {
            id,
            revision: 1,
            direction,
            player_id: player.id,
            player_name: player.name.clone(),
            player_market_value: player.market_value,
            counterpart: Counterpart::from(counterpart),
            terms,
        }
    }

    pub fn revise(&mut self, terms: DealTerms) {
        self.terms = terms;
        self.revision += 1;
    }

    pub fn snapshot(&self) -> ProposalSnapshot {
        ProposalSnapshot {
            proposal_id: self.id,
            revision: self.revision,
            cash: self.terms.cash.amount,
        }
    }

    /// Players whose ownership changes if this proposal is executed.
    pub fn involved_players(&self) -> Vec<u32> {
        let mut ids = vec![self.player_id];

        if let Some(swap) = &self.terms.player_swap {
            ids.push(swap.player_id);
        }

        ids
    }
}

/// What the client believes the proposal looks like. Only used as an optimistic-lock token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSnapshot {
    pub proposal_id: u32,
    pub revision: u32,
    pub cash: i64,
}
