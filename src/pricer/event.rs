//! Parsing of input lines into book events

use crate::orderbook::{PricerError, TargetQuote, side_code};
use crate::utils::parse_price;
use pricelevel::Side;
use std::fmt;

/// One line of input after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    /// `<timestamp> A <order-id> <B|S> <price> <size>`
    Add {
        timestamp: u64,
        id: String,
        side: Side,
        /// Price in hundredths
        price: u64,
        size: u64,
    },

    /// `<timestamp> R <order-id> <size>`
    Reduce {
        timestamp: u64,
        id: String,
        size: u64,
    },
}

impl BookEvent {
    /// Parse a whitespace-delimited input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, PricerError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = fields.first() else {
            return Ok(None);
        };
        let timestamp: u64 = first
            .parse()
            .map_err(|_| PricerError::InvalidTimestamp(first.to_string()))?;

        let event = match fields.as_slice() {
            [_, "A", id, side, price, size] => BookEvent::Add {
                timestamp,
                id: id.to_string(),
                side: parse_side(side)?,
                price: parse_price(price).ok_or_else(|| PricerError::InvalidPrice(price.to_string()))?,
                size: parse_size(size)?,
            },
            [_, "R", id, size] => BookEvent::Reduce {
                timestamp,
                id: id.to_string(),
                size: parse_size(size)?,
            },
            _ => {
                return Err(PricerError::MalformedLine {
                    line: line.to_string(),
                });
            }
        };

        Ok(Some(event))
    }

    pub fn timestamp(&self) -> u64 {
        match self {
            BookEvent::Add { timestamp, .. } | BookEvent::Reduce { timestamp, .. } => *timestamp,
        }
    }
}

fn parse_side(field: &str) -> Result<Side, PricerError> {
    match field {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(PricerError::InvalidSide(other.to_string())),
    }
}

fn parse_size(field: &str) -> Result<u64, PricerError> {
    field
        .parse()
        .map_err(|_| PricerError::InvalidSize(field.to_string()))
}

/// A changed quote for one side, written as `<timestamp> <label> <amount|NA>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    /// Timestamp of the event that moved the quote
    pub timestamp: u64,

    /// Report label of the side that moved
    pub label: Side,

    pub quote: TargetQuote,
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp,
            side_code(self.label),
            self.quote
        )
    }
}
