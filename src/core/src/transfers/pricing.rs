use crate::shared::CurrencyValue;
use crate::transfers::settings::NegotiationSettings;
use rand::RngExt;

/// Market-specific prices a computer club puts on a player.
/// Wraps the player's market value with the club's side of the deal.
pub struct CounterpartPricing;

impl CounterpartPricing {
    /// What a computer club demands when it sells: market value plus a premium.
    pub fn asking_price<R: RngExt>(
        market_value: CurrencyValue,
        settings: &NegotiationSettings,
        rng: &mut R,
    ) -> CurrencyValue {
        market_value.scale(settings.asking_premium.sample(rng))
    }

    /// What a computer club opens with when it buys: a discounted share of market value.
    pub fn offer_price<R: RngExt>(
        market_value: CurrencyValue,
        settings: &NegotiationSettings,
        rng: &mut R,
    ) -> CurrencyValue {
        market_value.scale(settings.offer_share.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_asking_price_carries_premium() {
        let settings = NegotiationSettings::default();
        let mut rng = StdRng::seed_from_u64(11);
        let value = CurrencyValue::eur(10_000_000);

        for _ in 0..50 {
            let price = CounterpartPricing::asking_price(value, &settings, &mut rng);
            assert!(price.amount >= 12_500_000 && price.amount <= 17_500_000);
        }
    }

    #[test]
    fn test_offer_price_is_discounted() {
        let settings = NegotiationSettings::default();
        let mut rng = StdRng::seed_from_u64(12);
        let value = CurrencyValue::eur(10_000_000);

        for _ in 0..50 {
            let price = CounterpartPricing::offer_price(value, &settings, &mut rng);
            assert!(price.amount >= 2_500_000 && price.amount <= 7_500_000);
        }
    }

    #[test]
    fn test_same_seed_same_price() {
        let settings = NegotiationSettings::default();
        let value = CurrencyValue::eur(4_000_000);

        let first = CounterpartPricing::asking_price(value, &settings, &mut StdRng::seed_from_u64(3));
        let second = CounterpartPricing::asking_price(value, &settings, &mut StdRng::seed_from_u64(3));

        assert_eq!(first, second);
    }
}
