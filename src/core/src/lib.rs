pub mod club;
pub mod store;
pub mod transfers;

pub mod shared;
pub mod utils;

pub use club::*;
pub use store::{LeagueData, LeagueStore, MemoryStore};
pub use transfers::{TransferDesk, TransferError, TransferResult};
