use crate::shared::CurrencyValue;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("invalid negotiation state: {0}")]
    InvalidState(String),

    #[error("insufficient funds: {required} required, {available} available")]
    InsufficientFunds {
        required: CurrencyValue,
        available: CurrencyValue,
    },

    #[error("player {player_id} is no longer owned by the expected team")]
    AssetNotOwned { player_id: u32 },

    #[error("the counterpart has walked away from the negotiation")]
    NegotiationExhausted,

    #[error("transfer could not be completed: {0}")]
    TransactionFailed(String),

    #[error("player {0} not found")]
    PlayerNotFound(u32),

    #[error("team {0} not found")]
    TeamNotFound(u32),
}

pub type TransferResult<T> = Result<T, TransferError>;
