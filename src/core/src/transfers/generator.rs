use crate::shared::CurrencyValue;
use crate::transfers::offer::DealTerms;
use crate::transfers::pricing::CounterpartPricing;
use crate::transfers::settings::NegotiationSettings;
use crate::Player;
use log::debug;
use rand::RngExt;

/// Produces the computer club's proposals. Every random draw comes from the caller's generator.
pub struct DealGenerator<'s> {
    settings: &'s NegotiationSettings,
}

impl<'s> DealGenerator<'s> {
    pub fn new(settings: &'s NegotiationSettings) -> Self {
        DealGenerator { settings }
    }

    /// Opening demand of a club selling `target` to the user.
    /// May ask for one of the user's players in part-exchange.
    pub fn initial_buy<R: RngExt>(
        &self,
        rng: &mut R,
        target: &Player,
        user_squad: &[Player],
    ) -> DealTerms {
        let asking = CounterpartPricing::asking_price(target.market_value, self.settings, rng);

        self.maybe_swap(rng, asking, target, user_squad)
    }

    /// Opening offer of a club bidding for the user's `target`.
    /// May offer one of its own players in part-exchange. The discount band bounds the whole
    /// offer; with a swap the cash part alone may fall below it.
    pub fn initial_sell<R: RngExt>(
        &self,
        rng: &mut R,
        target: &Player,
        bidder_squad: &[Player],
    ) -> DealTerms {
        let offer = CounterpartPricing::offer_price(target.market_value, self.settings, rng);

        self.maybe_swap(rng, offer, target, bidder_squad)
    }

    /// Selling club lowers its total demand by one concession step.
    pub fn counter_buy<R: RngExt>(
        &self,
        rng: &mut R,
        current: &DealTerms,
        target: &Player,
        user_squad: &[Player],
    ) -> DealTerms {
        let step = self.settings.concession_step.sample(rng);
        let demand = current.total_value().scale(1.0 - step);

        debug!("counter demand for {}: {} -> {}", target, current.total_value(), demand);

        self.maybe_swap(rng, demand, target, user_squad)
    }

    /// Bidding club raises its total offer by one concession step.
    pub fn counter_sell<R: RngExt>(
        &self,
        rng: &mut R,
        current: &DealTerms,
        target: &Player,
        bidder_squad: &[Player],
    ) -> DealTerms {
        let step = self.settings.concession_step.sample(rng);
        let offer = current.total_value().scale(1.0 + step);

        debug!("counter offer for {}: {} -> {}", target, current.total_value(), offer);

        self.maybe_swap(rng, offer, target, bidder_squad)
    }

    fn maybe_swap<R: RngExt>(
        &self,
        rng: &mut R,
        total: CurrencyValue,
        target: &Player,
        squad: &[Player],
    ) -> DealTerms {
        if squad.is_empty() || rng.random::<f64>() >= self.settings.swap_chance {
            return DealTerms::cash_only(total);
        }

        let candidates = self.swap_candidates(total, target, squad);
        if candidates.is_empty() {
            return DealTerms::cash_only(total);
        }

        let swap = candidates[rng.random_range(0..candidates.len())];
        let cash = total.saturating_sub(swap.market_value);

        DealTerms::with_swap(cash, swap)
    }

    /// Players worth less than the whole deal, but at least the configured share of it.
    pub fn swap_candidates<'p>(
        &self,
        total: CurrencyValue,
        target: &Player,
        squad: &'p [Player],
    ) -> Vec<&'p Player> {
        let floor = total.amount as f64 * self.settings.swap_min_share;

        squad
            .iter()
            .filter(|p| p.id != target.id)
            .filter(|p| p.market_value.amount < total.amount)
            .filter(|p| p.market_value.amount as f64 >= floor)
            .collect()
    }
}
