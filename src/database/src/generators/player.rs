use crate::loaders::PlayerEntity;
use league_core::shared::CurrencyValue;
use league_core::{BASE_SALARY, Player, PlayerValueCalculator};
use rand::RngExt;
use rand::rngs::StdRng;

const SALARY_SPREAD: f64 = 0.2;
const WAGE_RISE_CAP: f64 = 0.25;

// stand-ins for rows without an age or any skills
const DEFAULT_AGE: u8 = 25;
const DEFAULT_SKILL: f64 = 60.0;

/// Turns static player rows into league players with a contract attached.
pub struct PlayerGenerator {
    rng: StdRng,
}

impl PlayerGenerator {
    pub fn new(rng: StdRng) -> Self {
        PlayerGenerator { rng }
    }

    pub fn generate(&mut self, entity: &PlayerEntity) -> Result<Player, String> {
        let salary = self.generate_salary(entity);
        let contract_years = self.generate_contract_years(entity.age);
        let yearly_wage_rise = self.generate_wage_rise(entity, salary);

        let mut builder = Player::builder()
            .id(entity.id)
            .name(entity.name.clone())
            .position(entity.position)
            .skills(entity.skills)
            .salary(salary)
            .contract_years(contract_years)
            .yearly_wage_rise(yearly_wage_rise);

        if let Some(age) = entity.age {
            builder = builder.age(age);
        }

        if let Some(team_id) = entity.team_id {
            builder = builder.team_id(team_id);
        }

        builder.build()
    }

    fn generate_salary(&mut self, entity: &PlayerEntity) -> CurrencyValue {
        let base = PlayerValueCalculator::base_salary(&entity.skills);
        let factor = self.rng.random_range((1.0 - SALARY_SPREAD)..=(1.0 + SALARY_SPREAD));

        let salary = base.scale(factor);
        if salary.amount < BASE_SALARY {
            return CurrencyValue::eur(BASE_SALARY);
        }

        salary
    }

    fn generate_contract_years(&mut self, age: Option<u8>) -> u8 {
        match age.unwrap_or_default() {
            age if age > 32 => self.rng.random_range(1..=2),
            age if age > 30 => self.rng.random_range(1..=3),
            _ => self.rng.random_range(2..=5),
        }
    }

    /// Young, highly skilled players get the steepest raises. Modest earners get 10% on top.
    fn generate_wage_rise(&mut self, entity: &PlayerEntity, salary: CurrencyValue) -> f64 {
        let age = entity.age.unwrap_or(DEFAULT_AGE);
        let skill = entity.skills.average().unwrap_or(DEFAULT_SKILL);

        let (low, high) = if age <= 23 && skill >= 78.0 {
            (0.15, 0.25)
        } else if age <= 23 && skill >= 70.0 {
            (0.10, 0.20)
        } else if age <= 26 && skill >= 75.0 {
            (0.08, 0.18)
        } else if age <= 29 && skill >= 72.0 {
            (0.05, 0.12)
        } else if age > 32 || skill < 65.0 {
            (0.0, 0.05)
        } else {
            (0.03, 0.08)
        };

        let mut rise: f64 = self.rng.random_range(low..=high);
        if salary.amount < BASE_SALARY * 5 {
            rise *= 1.1;
        }

        (rise.min(WAGE_RISE_CAP) * 1000.0).round() / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::PlayerSkills;
    use rand::SeedableRng;

    fn entity(age: Option<u8>, team_id: Option<u32>) -> PlayerEntity {
        PlayerEntity {
            id: 1,
            name: String::from("Luis Ruiz"),
            position: Default::default(),
            age,
            team_id,
            skills: PlayerSkills::uniform(80),
        }
    }

    #[test]
    fn test_salary_within_spread() {
        let mut generator = PlayerGenerator::new(StdRng::seed_from_u64(3));
        let base = PlayerValueCalculator::base_salary(&PlayerSkills::uniform(80)).amount as f64;

        for _ in 0..50 {
            let player = generator.generate(&entity(Some(25), Some(1))).unwrap();
            let salary = player.salary.amount as f64;

            assert!(salary >= (base * 0.8 - 1_000.0).max(300_000.0));
            assert!(salary <= base * 1.2 + 1_000.0);
        }
    }

    #[test]
    fn test_contract_years_by_age() {
        let mut generator = PlayerGenerator::new(StdRng::seed_from_u64(3));

        for _ in 0..50 {
            let veteran = generator.generate(&entity(Some(34), Some(1))).unwrap();
            let senior = generator.generate(&entity(Some(31), Some(1))).unwrap();
            let young = generator.generate(&entity(Some(22), Some(1))).unwrap();

            assert!((1..=2).contains(&veteran.contract_years));
            assert!((1..=3).contains(&senior.contract_years));
            assert!((2..=5).contains(&young.contract_years));
        }
    }

    #[test]
    fn test_wage_rise_by_age_and_skill() {
        let mut generator = PlayerGenerator::new(StdRng::seed_from_u64(9));

        let unrated = PlayerEntity {
            skills: PlayerSkills::default(),
            ..entity(None, Some(1))
        };

        for _ in 0..50 {
            let prospect = generator.generate(&entity(Some(21), Some(1))).unwrap();
            let veteran = generator.generate(&entity(Some(34), Some(1))).unwrap();
            let unrated = generator.generate(&unrated).unwrap();

            assert!((0.15..=0.25).contains(&prospect.yearly_wage_rise));
            assert!((0.0..=0.055).contains(&veteran.yearly_wage_rise));
            assert!((0.0..=0.055).contains(&unrated.yearly_wage_rise));
        }
    }

    #[test]
    fn test_free_agent_has_no_value() {
        let mut generator = PlayerGenerator::new(StdRng::seed_from_u64(3));
        let player = generator.generate(&entity(Some(25), None)).unwrap();

        assert!(player.is_free_agent());
        assert_eq!(player.market_value, CurrencyValue::zero());
    }
}
