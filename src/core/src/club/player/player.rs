use crate::club::player::builder::PlayerBuilder;
use crate::club::player::calculators::PlayerValueCalculator;
use crate::club::player::position::PlayerPositionType;
use crate::club::player::skills::{PlayerSkills, SkillRatings};
use crate::shared::CurrencyValue;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub age: Option<u8>,
    pub skills: PlayerSkills,

    // None for free agents
    pub team_id: Option<u32>,

    pub salary: CurrencyValue,
    pub contract_years: u8,
    // fraction the salary grows each season, at most 0.25
    pub yearly_wage_rise: f64,
    pub market_value: CurrencyValue,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn ratings(&self) -> SkillRatings {
        self.skills.ratings()
    }

    pub fn is_free_agent(&self) -> bool {
        self.team_id.is_none()
    }

    pub fn belongs_to(&self, team_id: u32) -> bool {
        self.team_id == Some(team_id)
    }

    /// Market value as the valuation curve sees it today. Free agents carry no fee.
    pub fn calculate_value(&self) -> CurrencyValue {
        if self.is_free_agent() {
            return CurrencyValue::zero();
        }

        PlayerValueCalculator::market_value(&self.skills, self.age)
    }

    pub fn revalue(&mut self) {
        self.market_value = self.calculate_value();
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_agent_has_no_value() {
        let mut player = Player::builder()
            .id(1)
            .name("Castolo")
            .skills(PlayerSkills::uniform(85))
            .build()
            .unwrap();

        player.revalue();
        assert_eq!(player.market_value.amount, 0);

        player.team_id = Some(4);
        player.revalue();
        assert!(player.market_value.amount > 0);
    }

    #[test]
    fn test_belongs_to() {
        let player = Player::builder()
            .id(2)
            .name("Minanda")
            .team_id(7)
            .build()
            .unwrap();

        assert!(player.belongs_to(7));
        assert!(!player.belongs_to(8));
        assert!(!player.is_free_agent());
    }
}
