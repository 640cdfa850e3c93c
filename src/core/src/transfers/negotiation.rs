use crate::transfers::error::{TransferError, TransferResult};
use crate::transfers::generator::DealGenerator;
use crate::transfers::offer::{DealDirection, DealProposal, DealTerms, ProposalSnapshot};
use crate::transfers::settings::NegotiationSettings;
use crate::Player;
use chrono::NaiveDateTime;
use log::info;
use rand::RngExt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStatus {
    Open,
    Accepted,
    Rejected,
    Exhausted,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationAction {
    Accept,
    Counter,
    Reject,
}

#[derive(Debug, Clone)]
pub struct TransferNegotiation {
    pub id: u32,
    pub user_id: u32,
    pub user_team_id: u32,
    pub current_offer: DealProposal,
    pub counter_offers: Vec<DealTerms>,
    pub status: NegotiationStatus,
    pub rounds: u32,
    pub patience: f64,
    pub created_date: NaiveDateTime,
}

impl TransferNegotiation {
    pub fn new(
        user_id: u32,
        user_team_id: u32,
        initial_offer: DealProposal,
        settings: &NegotiationSettings,
        created_date: NaiveDateTime,
    ) -> Self {
        TransferNegotiation {
            id: initial_offer.id,
            user_id,
            user_team_id,
            current_offer: initial_offer,
            counter_offers: Vec::new(),
            status: NegotiationStatus::Open,
            rounds: 0,
            patience: settings.initial_patience,
            created_date,
        }
    }

    pub fn direction(&self) -> DealDirection {
        self.current_offer.direction
    }

    pub fn player_id(&self) -> u32 {
        self.current_offer.player_id
    }

    pub fn counterpart_team_id(&self) -> u32 {
        self.current_offer.counterpart.team_id
    }

    /// Key of the desk's buy index; sell bids are not indexed.
    pub fn buy_key(&self) -> Option<(u32, u32)> {
        (self.direction() == DealDirection::UserBuys).then(|| (self.user_id, self.player_id()))
    }

    pub fn is_open(&self) -> bool {
        self.status == NegotiationStatus::Open
    }

    /// Open or accepted but not yet executed.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status,
            NegotiationStatus::Open | NegotiationStatus::Accepted
        )
    }

    pub fn rounds_left(&self, settings: &NegotiationSettings) -> u32 {
        if !self.is_open() {
            return 0;
        }

        settings.max_rounds.saturating_sub(self.rounds)
    }

    pub fn ensure_owner(&self, user_id: u32) -> TransferResult<()> {
        if self.user_id != user_id {
            return Err(TransferError::AccessDenied(format!(
                "negotiation {} belongs to another user",
                self.id
            )));
        }

        Ok(())
    }

    /// Rejects a client copy of the proposal that no longer matches the server's.
    pub fn check_snapshot(&self, snapshot: Option<&ProposalSnapshot>) -> TransferResult<()> {
        match snapshot {
            Some(snapshot) if *snapshot != self.current_offer.snapshot() => {
                Err(TransferError::InvalidState(format!(
                    "proposal {} has changed since revision {}",
                    self.id, snapshot.revision
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn accept(&mut self) -> TransferResult<()> {
        self.ensure_open()?;
        self.status = NegotiationStatus::Accepted;

        info!(
            "negotiation {}: accepted, player = {}, cash = {}",
            self.id,
            self.player_id(),
            self.current_offer.terms.cash
        );

        Ok(())
    }

    pub fn reject(&mut self) -> TransferResult<()> {
        self.ensure_open()?;
        self.status = NegotiationStatus::Rejected;

        info!("negotiation {}: rejected by user {}", self.id, self.user_id);

        Ok(())
    }

    /// Asks the computer club for a better deal. It either concedes one step or walks away;
    /// the counter that reaches `max_rounds` always ends the negotiation.
    pub fn counter_offer<R: RngExt>(
        &mut self,
        settings: &NegotiationSettings,
        rng: &mut R,
        target: &Player,
        squad: &[Player],
    ) -> TransferResult<&DealProposal> {
        self.ensure_open()?;

        self.rounds += 1;

        let walks_away = rng.random::<f64>() >= self.patience;
        if self.rounds >= settings.max_rounds || walks_away {
            self.status = NegotiationStatus::Exhausted;

            info!(
                "negotiation {}: counterpart {} ended talks after {} rounds",
                self.id, self.current_offer.counterpart.name, self.rounds
            );

            return Err(TransferError::NegotiationExhausted);
        }

        self.patience -= settings.patience_decay.sample(rng);

        let generator = DealGenerator::new(settings);
        let terms = match self.direction() {
            DealDirection::UserBuys => {
                generator.counter_buy(rng, &self.current_offer.terms, target, squad)
            }
            DealDirection::UserSells => {
                generator.counter_sell(rng, &self.current_offer.terms, target, squad)
            }
        };

        self.counter_offers.push(self.current_offer.terms.clone());
        self.current_offer.revise(terms);

        Ok(&self.current_offer)
    }

    pub fn close(&mut self) {
        self.status = NegotiationStatus::Closed;
    }

    fn ensure_open(&self) -> TransferResult<()> {
        if !self.is_open() {
            return Err(TransferError::InvalidState(format!(
                "negotiation {} is {:?}",
                self.id, self.status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CurrencyValue;
    use crate::transfers::settings::FactorRange;
    use crate::Team;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn target() -> Player {
        Player::builder()
            .id(10)
            .name("Valeny")
            .team_id(2)
            .market_value(CurrencyValue::eur(10_000_000))
            .build()
            .unwrap()
    }

    fn patient_settings() -> NegotiationSettings {
        NegotiationSettings {
            initial_patience: 1.0,
            patience_decay: FactorRange::fixed(0.0),
            swap_chance: 0.0,
            ..NegotiationSettings::default()
        }
    }

    fn negotiation(settings: &NegotiationSettings) -> TransferNegotiation {
        let club = Team::computer(2, "Arsenal", 0);
        let proposal = DealProposal::new(
            1,
            DealDirection::UserBuys,
            &target(),
            &club,
            DealTerms::cash_only(CurrencyValue::eur(15_000_000)),
        );

        TransferNegotiation::new(100, 1, proposal, settings, date())
    }

    #[test]
    fn test_accept_then_act_is_invalid() {
        let settings = NegotiationSettings::default();
        let mut negotiation = negotiation(&settings);

        negotiation.accept().unwrap();

        assert_eq!(negotiation.status, NegotiationStatus::Accepted);
        assert!(negotiation.is_live());
        assert!(matches!(negotiation.reject(), Err(TransferError::InvalidState(_))));
        assert!(matches!(negotiation.accept(), Err(TransferError::InvalidState(_))));
    }

    #[test]
    fn test_counter_lowers_demand() {
        let settings = patient_settings();
        let mut negotiation = negotiation(&settings);
        let mut rng = StdRng::seed_from_u64(3);

        let proposal = negotiation
            .counter_offer(&settings, &mut rng, &target(), &[])
            .unwrap();

        assert_eq!(proposal.revision, 2);
        assert!(proposal.terms.cash.amount < 15_000_000);
        assert_eq!(negotiation.counter_offers.len(), 1);
        assert_eq!(negotiation.rounds_left(&settings), 4);
    }

    #[test]
    fn test_rounds_are_bounded() {
        let settings = patient_settings();
        let mut negotiation = negotiation(&settings);
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 1..settings.max_rounds {
            assert!(negotiation.counter_offer(&settings, &mut rng, &target(), &[]).is_ok());
        }

        let result = negotiation.counter_offer(&settings, &mut rng, &target(), &[]);

        assert_eq!(result.unwrap_err(), TransferError::NegotiationExhausted);
        assert_eq!(negotiation.status, NegotiationStatus::Exhausted);
        assert_eq!(negotiation.rounds, settings.max_rounds);
        assert!(!negotiation.is_live());
    }

    #[test]
    fn test_impatient_counterpart_walks_away() {
        let settings = NegotiationSettings {
            initial_patience: 0.0,
            ..NegotiationSettings::default()
        };
        let mut negotiation = negotiation(&settings);
        let mut rng = StdRng::seed_from_u64(4);

        let result = negotiation.counter_offer(&settings, &mut rng, &target(), &[]);

        assert_eq!(result.unwrap_err(), TransferError::NegotiationExhausted);
        assert_eq!(negotiation.rounds, 1);
    }

    #[test]
    fn test_snapshot_mismatch_is_rejected() {
        let settings = patient_settings();
        let mut negotiation = negotiation(&settings);
        let stale = negotiation.current_offer.snapshot();

        assert!(negotiation.check_snapshot(Some(&stale)).is_ok());
        assert!(negotiation.check_snapshot(None).is_ok());

        negotiation
            .counter_offer(&settings, &mut StdRng::seed_from_u64(1), &target(), &[])
            .unwrap();

        assert!(matches!(
            negotiation.check_snapshot(Some(&stale)),
            Err(TransferError::InvalidState(_))
        ));
    }

    #[test]
    fn test_other_user_is_denied() {
        let negotiation = negotiation(&NegotiationSettings::default());

        assert!(negotiation.ensure_owner(100).is_ok());
        assert!(matches!(
            negotiation.ensure_owner(101),
            Err(TransferError::AccessDenied(_))
        ));
    }
}
