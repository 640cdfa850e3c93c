use crate::store::{LeagueStore, LeagueTransaction};
use crate::transfers::error::{TransferError, TransferResult};
use crate::transfers::negotiation::{NegotiationStatus, TransferNegotiation};
use crate::transfers::offer::DealDirection;
use crate::transfers::transfer::CompletedTransfer;
use crate::{Player, Team};
use chrono::NaiveDateTime;
use log::{info, warn};

/// Applies accepted deals to the store as one transaction.
pub struct TransferExecutor;

impl TransferExecutor {
    /// Re-validates an accepted deal against current league state, then moves players and money.
    /// On success the negotiation is closed; on any failure nothing in the store changes.
    pub fn execute<S: LeagueStore + ?Sized>(
        store: &S,
        negotiation: &mut TransferNegotiation,
        date: NaiveDateTime,
    ) -> TransferResult<CompletedTransfer> {
        if negotiation.status != NegotiationStatus::Accepted {
            return Err(TransferError::InvalidState(format!(
                "negotiation {} is {:?}, only accepted deals can be executed",
                negotiation.id, negotiation.status
            )));
        }

        let user_team = Self::team(store, negotiation.user_team_id)?;
        let counterpart = Self::team(store, negotiation.counterpart_team_id())?;

        let (seller, buyer) = match negotiation.direction() {
            DealDirection::UserBuys => (counterpart, user_team),
            DealDirection::UserSells => (user_team, counterpart),
        };

        let offer = &negotiation.current_offer;

        let player = Self::owned_player(store, offer.player_id, &seller)?;
        let swap = match &offer.terms.player_swap {
            Some(swap) => Some(Self::owned_player(store, swap.player_id, &buyer)?),
            None => None,
        };

        let fee = offer.terms.cash;
        if !buyer.can_afford(fee) {
            return Err(TransferError::InsufficientFunds {
                required: fee,
                available: buyer.finance.available(),
            });
        }

        let record = CompletedTransfer::new(
            player.id,
            player.name.clone(),
            seller.id,
            seller.name.clone(),
            buyer.id,
            buyer.name.clone(),
            fee,
            offer.terms.player_swap.clone(),
            negotiation.direction(),
            date,
        );

        let mut transaction = LeagueTransaction::new().move_player(player.id, seller.id, buyer.id);
        if let Some(swap) = &swap {
            transaction = transaction.move_player(swap.id, buyer.id, seller.id);
        }

        let transaction = transaction
            .debit(buyer.id, fee)
            .credit(seller.id, fee)
            .record(record);

        let recorded = store.commit(transaction).map_err(|error| {
            warn!(
                "transfer of {} rolled back, negotiation = {}: {}",
                player, negotiation.id, error
            );
            TransferError::TransactionFailed(error.to_string())
        })?;

        let transfer = recorded.into_iter().next().ok_or_else(|| {
            TransferError::TransactionFailed(String::from("transfer record was not written"))
        })?;

        negotiation.close();

        info!(
            "transfer {}: {} from {} to {}, fee = {}",
            transfer.id, player, seller.name, buyer.name, fee
        );

        Ok(transfer)
    }

    fn team<S: LeagueStore + ?Sized>(store: &S, team_id: u32) -> TransferResult<Team> {
        store.team(team_id).ok_or(TransferError::TeamNotFound(team_id))
    }

    fn owned_player<S: LeagueStore + ?Sized>(
        store: &S,
        player_id: u32,
        owner: &Team,
    ) -> TransferResult<Player> {
        match store.player(player_id) {
            Some(player) if player.belongs_to(owner.id) => Ok(player),
            _ => Err(TransferError::AssetNotOwned { player_id }),
        }
    }
}
