use crate::shared::CurrencyValue;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubFinancialBalance {
    pub balance: i64,
    pub income: i64,
    pub outcome: i64,
}

impl ClubFinancialBalance {
    pub fn new(balance: i64) -> Self {
        ClubFinancialBalance {
            balance,
            income: 0,
            outcome: 0,
        }
    }

    pub fn push_income(&mut self, amount: i64) {
        self.balance += amount;
        self.income += amount;
    }

    pub fn push_outcome(&mut self, amount: i64) {
        self.balance -= amount;
        self.outcome += amount;
    }

    pub fn available(&self) -> CurrencyValue {
        CurrencyValue::eur(self.balance)
    }

    pub fn add_transfer_income(&mut self, club_name: &str, amount: CurrencyValue) {
        debug!("club: {}, finance: transfer income = {}", club_name, amount);

        self.push_income(amount.amount);
    }

    pub fn spend_on_transfer(&mut self, club_name: &str, amount: CurrencyValue) {
        debug!("club: {}, finance: transfer outcome = {}", club_name, amount);

        self.push_outcome(amount.amount);
    }
}
