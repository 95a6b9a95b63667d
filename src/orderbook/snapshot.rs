//! Point-in-time view of one side of the book

use super::quote::TargetQuote;
use pricelevel::{OrderId, PriceLevelSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// Resting size of a captured level, summed from its orders
fn resting_size(level: &PriceLevelSnapshot) -> u128 {
    level
        .iter_orders()
        .map(|order| u128::from(order.visible_quantity()))
        .sum()
}

/// Snapshot of one side of the book, best level first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideSnapshot {
    /// Resting side code (`B` for bids, `S` for asks)
    pub side: String,

    /// Label this side reports under
    pub label: String,

    /// Quantity being priced
    pub target_size: u64,

    /// Value most recently reported for this side
    pub last_reported: TargetQuote,

    /// Number of resting orders on the whole side, not only the captured levels
    pub order_count: usize,

    /// Captured levels, best price first, orders in arrival order
    pub levels: Vec<PriceLevelSnapshot>,

    /// Input id of every captured order, keyed by its level order id
    pub order_names: BTreeMap<String, String>,
}

impl SideSnapshot {
    /// Input id of a captured order
    pub fn order_name(&self, order_id: OrderId) -> Option<&str> {
        self.order_names
            .get(&order_id.to_string())
            .map(String::as_str)
    }

    /// Best captured price and its total size
    pub fn best_level(&self) -> Option<(u64, u128)> {
        let best = self
            .levels
            .first()
            .map(|level| (level.price, resting_size(level)));
        trace!("best_level: {:?}", best);
        best
    }

    /// Total size across the captured levels
    pub fn total_size(&self) -> u128 {
        let size = self.levels.iter().map(resting_size).sum();
        trace!("total_size: {:?}", size);
        size
    }

    /// Total value (price * size, in hundredths) across the captured levels
    pub fn total_value(&self) -> u128 {
        let value = self
            .levels
            .iter()
            .map(|level| u128::from(level.price) * resting_size(level))
            .sum();
        trace!("total_value: {:?}", value);
        value
    }
}
