mod formatting;
mod time;

pub use formatting::*;
pub use time::*;
