use crate::club::finance::ClubFinancialBalance;
use crate::shared::CurrencyValue;
use crate::Player;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub team_type: TeamType,
    pub finance: ClubFinancialBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TeamType {
    /// Roster managed by a league member.
    User { user_id: u32 },
    /// Club run by the computer. Never short of cash when negotiating.
    Computer,
}

impl Team {
    pub fn user(id: u32, name: impl Into<String>, user_id: u32, budget: i64) -> Self {
        Team {
            id,
            name: name.into(),
            team_type: TeamType::User { user_id },
            finance: ClubFinancialBalance::new(budget),
        }
    }

    pub fn computer(id: u32, name: impl Into<String>, balance: i64) -> Self {
        Team {
            id,
            name: name.into(),
            team_type: TeamType::Computer,
            finance: ClubFinancialBalance::new(balance),
        }
    }

    pub fn owner(&self) -> Option<u32> {
        match self.team_type {
            TeamType::User { user_id } => Some(user_id),
            TeamType::Computer => None,
        }
    }

    pub fn is_owned_by(&self, user_id: u32) -> bool {
        self.owner() == Some(user_id)
    }

    pub fn is_computer(&self) -> bool {
        self.team_type == TeamType::Computer
    }

    pub fn can_afford(&self, amount: CurrencyValue) -> bool {
        match self.team_type {
            TeamType::Computer => true,
            TeamType::User { .. } => self.finance.balance >= amount.amount,
        }
    }
}

/// Wage bill and squad value of one roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamFinancialSummary {
    pub player_count: usize,
    pub total_salary: CurrencyValue,
    pub total_market_value: CurrencyValue,
    pub average_salary: CurrencyValue,
    pub average_market_value: CurrencyValue,
}

impl TeamFinancialSummary {
    pub fn from_players(players: &[Player]) -> Self {
        let player_count = players.len();

        let total_salary: i64 = players.iter().map(|p| p.salary.amount).sum();
        let total_market_value: i64 = players.iter().map(|p| p.market_value.amount).sum();

        let average = |total: i64| {
            if player_count > 0 {
                CurrencyValue::eur(total / player_count as i64)
            } else {
                CurrencyValue::zero()
            }
        };

        TeamFinancialSummary {
            player_count,
            total_salary: CurrencyValue::eur(total_salary),
            total_market_value: CurrencyValue::eur(total_market_value),
            average_salary: average(total_salary),
            average_market_value: average(total_market_value),
        }
    }
}
