//! Serializable view of the whole pricer

use super::stats::PricerStats;
use crate::orderbook::{PricerError, SideSnapshot};
use serde::{Deserialize, Serialize};

/// Both sides of the book plus processing counters at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricerSnapshot {
    /// Capture time in milliseconds since epoch
    pub timestamp: u64,

    /// Quantity priced on each side
    pub target_size: u64,

    /// Resting buy orders
    pub bids: SideSnapshot,

    /// Resting sell orders
    pub asks: SideSnapshot,

    pub stats: PricerStats,
}

impl PricerSnapshot {
    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, PricerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously written by [`PricerSnapshot::to_json`]
    pub fn from_json(json: &str) -> Result<Self, PricerError> {
        Ok(serde_json::from_str(json)?)
    }
}
