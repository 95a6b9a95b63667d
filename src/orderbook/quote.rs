//! Result of pricing the target size against one side of the book

use crate::utils::format_hundredths;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total cost of filling the target size, or the sentinel for insufficient depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetQuote {
    /// Total price in integer hundredths of the currency unit
    Amount(u128),

    /// Resting depth cannot fill the target size
    NotAvailable,
}

impl TargetQuote {
    /// Whether the side had enough depth to fill the target size
    pub fn is_available(&self) -> bool {
        matches!(self, TargetQuote::Amount(_))
    }

    /// The total in hundredths, if available
    pub fn amount(&self) -> Option<u128> {
        match self {
            TargetQuote::Amount(total) => Some(*total),
            TargetQuote::NotAvailable => None,
        }
    }
}

impl fmt::Display for TargetQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetQuote::Amount(total) => f.write_str(&format_hundredths(*total)),
            TargetQuote::NotAvailable => f.write_str("NA"),
        }
    }
}
