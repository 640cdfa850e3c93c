use crate::club::{Player, SkillRatings, Team, TeamFinancialSummary};
use crate::transfers::negotiation::{NegotiationStatus, TransferNegotiation};
use crate::transfers::offer::DealProposal;
use crate::transfers::settings::NegotiationSettings;
use crate::transfers::transfer::CompletedTransfer;
use serde::Serialize;

/// A proposal together with where its negotiation stands. Enough to render without another call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalView {
    #[serde(flatten)]
    pub proposal: DealProposal,
    pub status: NegotiationStatus,
    pub rounds_left: u32,
}

impl ProposalView {
    pub fn new(negotiation: &TransferNegotiation, settings: &NegotiationSettings) -> Self {
        ProposalView {
            proposal: negotiation.current_offer.clone(),
            status: negotiation.status,
            rounds_left: negotiation.rounds_left(settings),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCard {
    #[serde(flatten)]
    pub player: Player,
    pub ratings: SkillRatings,
    pub overall: u8,
}

impl From<Player> for PlayerCard {
    fn from(player: Player) -> Self {
        let ratings = player.ratings();

        PlayerCard {
            overall: ratings.overall(),
            ratings,
            player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<PlayerCard>,
    pub summary: TeamFinancialSummary,
    pub transfers: Vec<CompletedTransfer>,
}

impl TeamCard {
    pub fn new(team: Team, players: Vec<Player>, history: Vec<CompletedTransfer>) -> Self {
        let summary = TeamFinancialSummary::from_players(&players);

        let transfers = history
            .into_iter()
            .filter(|transfer| transfer.involves_team(team.id))
            .collect();

        TeamCard {
            team,
            players: players.into_iter().map(PlayerCard::from).collect(),
            summary,
            transfers,
        }
    }
}
