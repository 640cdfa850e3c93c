pub mod broker;
pub mod desk;
pub mod error;
pub mod executor;
pub mod generator;
pub mod negotiation;
pub mod offer;
pub mod pricing;
pub mod settings;
pub mod transfer;
pub mod views;

pub use broker::*;
pub use desk::*;
pub use error::*;
pub use executor::*;
pub use generator::*;
pub use negotiation::*;
pub use offer::*;
pub use pricing::*;
pub use settings::*;
pub use transfer::*;
pub use views::*;
