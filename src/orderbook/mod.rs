//! Order book sides and target-size pricing.

mod error;
mod order;
mod quote;
pub mod side;
mod snapshot;

pub use error::PricerError;
pub use order::Order;
pub use quote::TargetQuote;
pub use side::{OrderBookSide, side_code};
pub use snapshot::SideSnapshot;
