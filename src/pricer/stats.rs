//! Counters kept while processing an input stream

use serde::{Deserialize, Serialize};

/// Running counts of what the pricer did with its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricerStats {
    /// Lines handed to the pricer, blank ones included
    pub lines_read: u64,

    /// Events that reached a side of the book
    pub events_applied: u64,

    /// Lines skipped because they could not be parsed or applied
    pub lines_rejected: u64,

    /// Reduce events naming an order resting on neither side
    pub unknown_reductions: u64,

    /// Quote changes reported
    pub emissions: u64,
}
