use rand::RngExt;

/// Closed interval of multiplicative factors, sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
}

impl FactorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        FactorRange { min, max }
    }

    pub const fn fixed(value: f64) -> Self {
        FactorRange::new(value, value)
    }

    pub fn sample<R: RngExt>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }

        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tunables of the computer-controlled haggling.
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationSettings {
    /// The counter that reaches this round count ends the negotiation.
    pub max_rounds: u32,
    /// Multiplier on market value when a computer club sells.
    pub asking_premium: FactorRange,
    /// Share of market value a computer club opens with when buying.
    pub offer_share: FactorRange,
    /// Relative move toward agreement per counter.
    pub concession_step: FactorRange,
    pub initial_patience: f64,
    pub patience_decay: FactorRange,
    /// Chance that a proposal asks for (or offers) a player instead of part of the cash.
    pub swap_chance: f64,
    /// A swapped player must be worth at least this share of the deal and less than all of it.
    pub swap_min_share: f64,
    pub sell_batch_min: usize,
    pub sell_batch_max: usize,
}

impl Default for NegotiationSettings {
    fn default() -> Self {
        NegotiationSettings {
            max_rounds: 5,
            asking_premium: FactorRange::new(1.25, 1.75),
            offer_share: FactorRange::new(0.25, 0.75),
            concession_step: FactorRange::new(0.05, 0.15),
            initial_patience: 0.75,
            patience_decay: FactorRange::new(0.05, 0.15),
            swap_chance: 0.3,
            swap_min_share: 0.2,
            sell_batch_min: 3,
            sell_batch_max: 5,
        }
    }
}

impl NegotiationSettings {
    /// Smallest share of market value a buying club may open with.
    pub fn max_discount(&self) -> f64 {
        1.0 - self.offer_share.min
    }

    pub fn sell_batch_size<R: RngExt>(&self, rng: &mut R) -> usize {
        let min = self.sell_batch_min.max(1);
        let max = self.sell_batch_max.max(min);

        rng.random_range(min..=max)
    }
}
