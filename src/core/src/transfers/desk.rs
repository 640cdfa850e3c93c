use crate::store::{LeagueStore, LeagueTransaction};
use crate::transfers::broker::{SellBatch, SellBroker};
use crate::transfers::error::{TransferError, TransferResult};
use crate::transfers::executor::TransferExecutor;
use crate::transfers::generator::DealGenerator;
use crate::transfers::negotiation::{NegotiationAction, NegotiationStatus, TransferNegotiation};
use crate::transfers::offer::{DealDirection, DealProposal, ProposalSnapshot};
use crate::transfers::settings::NegotiationSettings;
use crate::transfers::transfer::CompletedTransfer;
use crate::transfers::views::{PlayerCard, ProposalView, TeamCard};
use crate::{Player, Team};
use chrono::{Local, NaiveDateTime};
use dashmap::DashMap;
use itertools::Itertools;
use log::{debug, info};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

type SharedNegotiation = Arc<Mutex<TransferNegotiation>>;

/// Server-side home of every negotiation in the league.
///
/// Locks are always taken in this order: buy index or sell batch, then a single session,
/// then team locks and the random generator, then the store. Nothing is held while another
/// session is closed.
///
/// Only live negotiations are kept. A session is forgotten once it is rejected, exhausted,
/// cancelled, withdrawn or executed.
pub struct TransferDesk<S: LeagueStore> {
    store: S,
    settings: NegotiationSettings,
    rng: Mutex<StdRng>,

    sessions: DashMap<u32, SharedNegotiation>,
    // (user_id, player_id) -> session id of the user's buy negotiation
    buy_index: Mutex<HashMap<(u32, u32), u32>>,
    // player_id -> bids for that player
    sell_batches: DashMap<u32, Arc<Mutex<SellBatch>>>,
    team_locks: DashMap<u32, Arc<Mutex<()>>>,

    next_id: AtomicU32,
}

impl<S: LeagueStore> TransferDesk<S> {
    pub fn new(store: S, settings: NegotiationSettings, rng: StdRng) -> Self {
        TransferDesk {
            store,
            settings,
            rng: Mutex::new(rng),
            sessions: DashMap::new(),
            buy_index: Mutex::new(HashMap::new()),
            sell_batches: DashMap::new(),
            team_locks: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Starts buying a computer club's player, or returns the negotiation already running
    /// for this user and player.
    pub fn open_or_get_negotiation(&self, user_id: u32, player_id: u32) -> TransferResult<ProposalView> {
        let user_team = self.user_team(user_id)?;
        let player = self.player(player_id)?;

        let owner_id = player.team_id.ok_or_else(|| {
            TransferError::AccessDenied(format!("{} is a free agent", player))
        })?;
        let counterpart = self.team(owner_id)?;

        if !counterpart.is_computer() {
            return Err(TransferError::AccessDenied(format!(
                "{} is not for sale by a computer club",
                player
            )));
        }

        let mut index = self.buy_index.lock();

        if let Some(session) = index.get(&(user_id, player_id)).and_then(|id| self.session(*id)) {
            let negotiation = session.lock();
            if negotiation.is_live() {
                return Ok(ProposalView::new(&negotiation, &self.settings));
            }
        }

        let squad = self.store.team_players(user_team.id);
        let terms = {
            let mut rng = self.rng.lock();
            DealGenerator::new(&self.settings).initial_buy(&mut *rng, &player, &squad)
        };

        let id = self.next_id();
        let proposal = DealProposal::new(id, DealDirection::UserBuys, &player, &counterpart, terms);
        let negotiation = TransferNegotiation::new(user_id, user_team.id, proposal, &self.settings, now());

        info!(
            "negotiation {}: user {} opened talks with {} for {}, asking = {}",
            id,
            user_id,
            counterpart.name,
            player,
            negotiation.current_offer.terms.total_value()
        );

        let view = ProposalView::new(&negotiation, &self.settings);

        self.sessions.insert(id, Arc::new(Mutex::new(negotiation)));
        if let Some(previous) = index.insert((user_id, player_id), id) {
            self.sessions.remove(&previous);
        }

        Ok(view)
    }

    pub fn act_on_negotiation(
        &self,
        user_id: u32,
        player_id: u32,
        action: NegotiationAction,
        snapshot: Option<&ProposalSnapshot>,
    ) -> TransferResult<ProposalView> {
        let session = self.buy_session(user_id, player_id)?;

        let (result, finished) = {
            let mut negotiation = session.lock();

            negotiation.ensure_owner(user_id)?;
            negotiation.check_snapshot(snapshot)?;

            let result = self
                .apply_action(&mut negotiation, action)
                .map(|_| ProposalView::new(&negotiation, &self.settings));

            (result, finished_key(&negotiation))
        };

        if let Some((id, buy_key)) = finished {
            self.retire(id, buy_key);
        }

        result
    }

    /// Executes the accepted deal for `player_id`, whether the user is buying or selling.
    pub fn confirm_transfer(
        &self,
        user_id: u32,
        player_id: u32,
        snapshot: Option<&ProposalSnapshot>,
    ) -> TransferResult<CompletedTransfer> {
        let session = self.accepted_session(user_id, player_id)?;

        let (transfer, moved_players) = {
            let mut negotiation = session.lock();

            negotiation.ensure_owner(user_id)?;
            negotiation.check_snapshot(snapshot)?;

            let moved_players = negotiation.current_offer.involved_players();

            let locks = self.team_locks_for(&[
                negotiation.user_team_id,
                negotiation.counterpart_team_id(),
            ]);
            let _guards = locks.iter().map(|lock| lock.lock()).collect_vec();

            let transfer = TransferExecutor::execute(&self.store, &mut negotiation, now())?;

            (transfer, moved_players)
        };

        self.close_stale_sessions(&moved_players);

        Ok(transfer)
    }

    pub fn cancel_negotiation(&self, user_id: u32, player_id: u32) -> TransferResult<()> {
        let session = self.buy_session(user_id, player_id)?;

        let id = {
            let mut negotiation = session.lock();

            negotiation.ensure_owner(user_id)?;

            if !negotiation.is_live() {
                return Err(TransferError::InvalidState(format!(
                    "negotiation {} is {:?}",
                    negotiation.id, negotiation.status
                )));
            }

            negotiation.close();

            info!("negotiation {}: cancelled by user {}", negotiation.id, user_id);

            negotiation.id
        };

        self.retire(id, Some((user_id, player_id)));

        Ok(())
    }

    /// Puts one of the user's players on the market and collects bids from several computer
    /// clubs. While any bid is still live the same bids are returned.
    pub fn open_sell_batch(&self, user_id: u32, player_id: u32) -> TransferResult<Vec<ProposalView>> {
        let user_team = self.user_team(user_id)?;
        let player = self.player(player_id)?;

        if !player.belongs_to(user_team.id) {
            return Err(TransferError::AccessDenied(format!(
                "{} does not play for {}",
                player, user_team.name
            )));
        }

        let batch = Arc::clone(
            self.sell_batches
                .entry(player_id)
                .or_insert_with(|| Arc::new(Mutex::new(SellBatch::new(user_id, player_id))))
                .value(),
        );
        let mut batch = batch.lock();

        if batch.user_id == user_id {
            let live = self.live_views(&batch.proposal_ids);
            if !live.is_empty() {
                return Ok(live);
            }
        }

        let mut rng = self.rng.lock();

        let size = self.settings.sell_batch_size(&mut *rng);
        let bidders = SellBroker::pick_bidders(&mut *rng, self.store.computer_teams(), size);
        let generator = DealGenerator::new(&self.settings);

        let mut views = Vec::with_capacity(bidders.len());
        let mut ids = Vec::with_capacity(bidders.len());

        for club in &bidders {
            let squad = self.store.team_players(club.id);
            let terms = generator.initial_sell(&mut *rng, &player, &squad);

            let id = self.next_id();
            let proposal = DealProposal::new(id, DealDirection::UserSells, &player, club, terms);
            let negotiation =
                TransferNegotiation::new(user_id, user_team.id, proposal, &self.settings, now());

            debug!(
                "negotiation {}: {} bids {} for {}",
                id,
                club.name,
                negotiation.current_offer.terms.total_value(),
                player
            );

            views.push(ProposalView::new(&negotiation, &self.settings));
            ids.push(id);

            self.sessions.insert(id, Arc::new(Mutex::new(negotiation)));
        }

        drop(rng);

        for previous in batch.replace(user_id, ids) {
            self.sessions.remove(&previous);
        }

        info!(
            "user {} listed {}, bids received = {}",
            user_id,
            player,
            views.len()
        );

        Ok(views)
    }

    pub fn sell_proposal(&self, user_id: u32, proposal_id: u32) -> TransferResult<ProposalView> {
        let session = self.sell_session(proposal_id)?;
        let negotiation = session.lock();

        negotiation.ensure_owner(user_id)?;

        if !negotiation.is_live() {
            return Err(TransferError::InvalidState(format!(
                "proposal {} is {:?}",
                proposal_id, negotiation.status
            )));
        }

        Ok(ProposalView::new(&negotiation, &self.settings))
    }

    /// Acts on one bid. Accepting it withdraws every other bid for the same player.
    pub fn act_on_sell_proposal(
        &self,
        user_id: u32,
        proposal_id: u32,
        action: NegotiationAction,
        snapshot: Option<&ProposalSnapshot>,
    ) -> TransferResult<ProposalView> {
        let session = self.sell_session(proposal_id)?;

        let player_id = {
            let negotiation = session.lock();
            negotiation.ensure_owner(user_id)?;
            negotiation.player_id()
        };

        let batch = self
            .sell_batches
            .get(&player_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| no_session(proposal_id))?;
        let batch = batch.lock();

        if !batch.contains(proposal_id) {
            return Err(no_session(proposal_id));
        }

        let (result, status) = {
            let mut negotiation = session.lock();

            negotiation.check_snapshot(snapshot)?;

            let result = self
                .apply_action(&mut negotiation, action)
                .map(|_| ProposalView::new(&negotiation, &self.settings));

            (result, negotiation.status)
        };

        match status {
            NegotiationStatus::Accepted => {
                for sibling in batch.siblings(proposal_id) {
                    if let Some(session) = self.session(sibling) {
                        session.lock().close();
                        self.retire(sibling, None);
                    }
                }

                debug!("proposal {}: accepted, sibling bids withdrawn", proposal_id);
            }
            NegotiationStatus::Open => {}
            _ => self.retire(proposal_id, None),
        }

        result
    }

    pub fn player_card(&self, player_id: u32) -> TransferResult<PlayerCard> {
        self.player(player_id).map(PlayerCard::from)
    }

    pub fn team_card(&self, team_id: u32) -> TransferResult<TeamCard> {
        let team = self.team(team_id)?;
        let players = self.store.team_players(team_id);

        Ok(TeamCard::new(team, players, self.store.transfers()))
    }

    pub fn transfer_history(&self) -> Vec<CompletedTransfer> {
        self.store.transfers()
    }

    /// Recomputes every market value from the skill sheets. Returns how many changed.
    pub fn revalue_players(&self) -> TransferResult<usize> {
        let changes = self
            .store
            .players()
            .into_iter()
            .map(|player| (player.id, player.market_value, player.calculate_value()))
            .filter(|(_, current, value)| current != value)
            .collect_vec();

        let count = changes.len();

        let transaction = changes
            .into_iter()
            .fold(LeagueTransaction::new(), |transaction, (player_id, _, value)| {
                transaction.set_market_value(player_id, value)
            });

        self.store
            .commit(transaction)
            .map_err(|error| TransferError::TransactionFailed(error.to_string()))?;

        info!("market values recomputed, changed = {}", count);

        Ok(count)
    }

    fn apply_action(
        &self,
        negotiation: &mut TransferNegotiation,
        action: NegotiationAction,
    ) -> TransferResult<()> {
        match action {
            NegotiationAction::Accept => negotiation.accept(),
            NegotiationAction::Reject => negotiation.reject(),
            NegotiationAction::Counter => {
                if !negotiation.is_open() {
                    return Err(TransferError::InvalidState(format!(
                        "negotiation {} is {:?}",
                        negotiation.id, negotiation.status
                    )));
                }

                let target = self.player(negotiation.player_id())?;
                let squad_team_id = match negotiation.direction() {
                    DealDirection::UserBuys => negotiation.user_team_id,
                    DealDirection::UserSells => negotiation.counterpart_team_id(),
                };
                let squad = self.store.team_players(squad_team_id);

                let mut rng = self.rng.lock();
                negotiation
                    .counter_offer(&self.settings, &mut *rng, &target, &squad)
                    .map(|_| ())
            }
        }
    }

    /// Closes and forgets every negotiation whose deal names a player that has just changed
    /// teams, the executed one included.
    fn close_stale_sessions(&self, moved_players: &[u32]) {
        for player_id in moved_players {
            self.sell_batches.remove(player_id);
        }

        let sessions = self
            .sessions
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect_vec();

        let mut stale = Vec::new();

        for session in sessions {
            let mut negotiation = session.lock();

            let involved = negotiation
                .current_offer
                .involved_players()
                .iter()
                .any(|id| moved_players.contains(id));

            if !involved {
                continue;
            }

            if negotiation.is_live() {
                negotiation.close();
                debug!("negotiation {}: closed, player moved", negotiation.id);
            }

            stale.push((negotiation.id, negotiation.buy_key()));
        }

        for (id, buy_key) in stale {
            self.retire(id, buy_key);
        }
    }

    /// Forgets a finished negotiation. Takes the buy index, so no session may be locked.
    fn retire(&self, id: u32, buy_key: Option<(u32, u32)>) {
        if let Some(key) = buy_key {
            let mut index = self.buy_index.lock();
            if index.get(&key) == Some(&id) {
                index.remove(&key);
            }
        }

        if self.sessions.remove(&id).is_some() {
            debug!("negotiation {}: retired", id);
        }
    }

    fn live_views(&self, ids: &[u32]) -> Vec<ProposalView> {
        ids.iter()
            .filter_map(|id| self.session(*id))
            .filter_map(|session| {
                let negotiation = session.lock();
                negotiation
                    .is_live()
                    .then(|| ProposalView::new(&negotiation, &self.settings))
            })
            .collect()
    }

    fn accepted_session(&self, user_id: u32, player_id: u32) -> TransferResult<SharedNegotiation> {
        let is_accepted =
            |session: &SharedNegotiation| session.lock().status == NegotiationStatus::Accepted;

        if let Ok(session) = self.buy_session(user_id, player_id) {
            if is_accepted(&session) {
                return Ok(session);
            }
        }

        let batch = self
            .sell_batches
            .get(&player_id)
            .map(|entry| Arc::clone(entry.value()));

        if let Some(batch) = batch {
            let batch = batch.lock();
            if batch.user_id == user_id {
                let accepted = batch
                    .proposal_ids
                    .iter()
                    .filter_map(|id| self.session(*id))
                    .find(|session| is_accepted(session));

                if let Some(session) = accepted {
                    return Ok(session);
                }
            }
        }

        Err(TransferError::InvalidState(format!(
            "no accepted deal for player {}",
            player_id
        )))
    }

    fn buy_session(&self, user_id: u32, player_id: u32) -> TransferResult<SharedNegotiation> {
        let id = self.buy_index.lock().get(&(user_id, player_id)).copied();

        id.and_then(|id| self.session(id)).ok_or_else(|| {
            TransferError::InvalidState(format!("no negotiation for player {}", player_id))
        })
    }

    fn sell_session(&self, proposal_id: u32) -> TransferResult<SharedNegotiation> {
        let session = self.session(proposal_id).ok_or_else(|| no_session(proposal_id))?;

        if session.lock().direction() != DealDirection::UserSells {
            return Err(no_session(proposal_id));
        }

        Ok(session)
    }

    fn session(&self, id: u32) -> Option<SharedNegotiation> {
        self.sessions.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Per-team locks in ascending id order.
    fn team_locks_for(&self, team_ids: &[u32]) -> Vec<Arc<Mutex<()>>> {
        team_ids
            .iter()
            .copied()
            .sorted()
            .dedup()
            .map(|team_id| Arc::clone(self.team_locks.entry(team_id).or_default().value()))
            .collect()
    }

    fn user_team(&self, user_id: u32) -> TransferResult<Team> {
        self.store.team_by_user(user_id).ok_or_else(|| {
            TransferError::AccessDenied(format!("user {} does not manage a team", user_id))
        })
    }

    fn player(&self, player_id: u32) -> TransferResult<Player> {
        self.store
            .player(player_id)
            .ok_or(TransferError::PlayerNotFound(player_id))
    }

    fn team(&self, team_id: u32) -> TransferResult<Team> {
        self.store
            .team(team_id)
            .ok_or(TransferError::TeamNotFound(team_id))
    }

    fn next_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

// id and buy index key of a negotiation that can no longer move
fn finished_key(negotiation: &TransferNegotiation) -> Option<(u32, Option<(u32, u32)>)> {
    (!negotiation.is_live()).then(|| (negotiation.id, negotiation.buy_key()))
}

fn no_session(proposal_id: u32) -> TransferError {
    TransferError::InvalidState(format!("no sell proposal {}", proposal_id))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
