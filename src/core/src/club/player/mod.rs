pub mod builder;
pub mod calculators;
pub mod player;
pub mod position;
pub mod skills;

pub use builder::*;
pub use calculators::*;
pub use player::*;
pub use position::*;
pub use skills::*;
