//! Event parsing and routing between the two sides of the book.

mod config;
mod event;
mod router;
mod snapshot;
mod stats;

pub use config::PricerConfig;
pub use event::{BookEvent, Emission};
pub use router::Pricer;
pub use snapshot::PricerSnapshot;
pub use stats::PricerStats;
