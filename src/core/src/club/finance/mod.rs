mod balance;

pub use balance::*;
