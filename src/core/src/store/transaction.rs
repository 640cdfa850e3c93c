use crate::shared::CurrencyValue;
use crate::transfers::CompletedTransfer;

#[derive(Debug, Clone, PartialEq)]
pub enum LeagueMutation {
    MovePlayer {
        player_id: u32,
        from_team_id: u32,
        to_team_id: u32,
    },
    Credit {
        team_id: u32,
        amount: CurrencyValue,
    },
    Debit {
        team_id: u32,
        amount: CurrencyValue,
    },
    SetMarketValue {
        player_id: u32,
        value: CurrencyValue,
    },
    RecordTransfer(CompletedTransfer),
}

/// Ordered batch of mutations applied all-or-nothing by a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueTransaction {
    mutations: Vec<LeagueMutation>,
}

impl LeagueTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_player(mut self, player_id: u32, from_team_id: u32, to_team_id: u32) -> Self {
        self.mutations.push(LeagueMutation::MovePlayer {
            player_id,
            from_team_id,
            to_team_id,
        });
        self
    }

    pub fn credit(mut self, team_id: u32, amount: CurrencyValue) -> Self {
        self.mutations.push(LeagueMutation::Credit { team_id, amount });
        self
    }

    pub fn debit(mut self, team_id: u32, amount: CurrencyValue) -> Self {
        self.mutations.push(LeagueMutation::Debit { team_id, amount });
        self
    }

    pub fn set_market_value(mut self, player_id: u32, value: CurrencyValue) -> Self {
        self.mutations.push(LeagueMutation::SetMarketValue { player_id, value });
        self
    }

    pub fn record(mut self, transfer: CompletedTransfer) -> Self {
        self.mutations.push(LeagueMutation::RecordTransfer(transfer));
        self
    }

    pub fn mutations(&self) -> &[LeagueMutation] {
        &self.mutations
    }

    pub fn into_mutations(self) -> Vec<LeagueMutation> {
        self.mutations
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}
