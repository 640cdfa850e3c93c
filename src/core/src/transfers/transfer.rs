use crate::shared::CurrencyValue;
use crate::transfers::offer::{DealDirection, SwapPlayer};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

/// Immutable outcome of an executed deal. The player moves `from` -> `to`,
/// the fee flows the other way and a swapped player, if any, moves `to` -> `from`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedTransfer {
    pub id: u32,
    pub player_id: u32,
    pub player_name: String,
    pub from_team_id: u32,
    pub from_team_name: String,
    pub to_team_id: u32,
    pub to_team_name: String,
    pub fee: CurrencyValue,
    pub player_swap: Option<SwapPlayer>,
    pub direction: DealDirection,
    pub transfer_date: NaiveDateTime,
    pub season_year: u16,
}

impl CompletedTransfer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_id: u32,
        player_name: String,
        from_team_id: u32,
        from_team_name: String,
        to_team_id: u32,
        to_team_name: String,
        fee: CurrencyValue,
        player_swap: Option<SwapPlayer>,
        direction: DealDirection,
        transfer_date: NaiveDateTime,
    ) -> Self {
        // season runs August to July
        let season_year = if transfer_date.month() >= 8 {
            transfer_date.year() as u16
        } else {
            (transfer_date.year() - 1) as u16
        };

        CompletedTransfer {
            id: 0,
            player_id,
            player_name,
            from_team_id,
            from_team_name,
            to_team_id,
            to_team_name,
            fee,
            player_swap,
            direction,
            transfer_date,
            season_year,
        }
    }

    pub fn involves_team(&self, team_id: u32) -> bool {
        self.from_team_id == team_id || self.to_team_id == team_id
    }
}
