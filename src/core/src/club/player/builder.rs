use crate::club::player::calculators::PlayerValueCalculator;
use crate::club::player::position::PlayerPositionType;
use crate::club::player::skills::PlayerSkills;
use crate::shared::CurrencyValue;
use crate::Player;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerPositionType>,
    age: Option<u8>,
    skills: Option<PlayerSkills>,
    team_id: Option<u32>,
    salary: Option<CurrencyValue>,
    contract_years: Option<u8>,
    yearly_wage_rise: Option<f64>,
    market_value: Option<CurrencyValue>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn salary(mut self, salary: CurrencyValue) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn contract_years(mut self, contract_years: u8) -> Self {
        self.contract_years = Some(contract_years);
        self
    }

    pub fn yearly_wage_rise(mut self, yearly_wage_rise: f64) -> Self {
        self.yearly_wage_rise = Some(yearly_wage_rise);
        self
    }

    /// Fixes the market value instead of deriving it from the skill sheet.
    pub fn market_value(mut self, market_value: CurrencyValue) -> Self {
        self.market_value = Some(market_value);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let skills = self.skills.unwrap_or_default();

        let mut player = Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.unwrap_or_default(),
            age: self.age,
            skills,
            team_id: self.team_id,
            salary: self
                .salary
                .unwrap_or_else(|| PlayerValueCalculator::base_salary(&skills)),
            contract_years: self.contract_years.unwrap_or(2),
            yearly_wage_rise: self.yearly_wage_rise.unwrap_or_default(),
            market_value: CurrencyValue::zero(),
        };

        match self.market_value {
            Some(value) => player.market_value = value,
            None => player.revalue(),
        }

        Ok(player)
    }
}
