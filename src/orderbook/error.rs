//! Pricer error types

use std::fmt;

/// Errors that can occur while configuring the pricer or processing its input
#[derive(Debug)]
pub enum PricerError {
    /// Leading timestamp field is not an unsigned integer
    InvalidTimestamp(String),

    /// Line matches neither the add shape nor the reduce shape
    MalformedLine {
        /// The raw line that was rejected
        line: String,
    },

    /// Price field could not be converted to integer hundredths
    InvalidPrice(String),

    /// Size field is not a non-negative integer
    InvalidSize(String),

    /// Side field is neither `B` nor `S`
    InvalidSide(String),

    /// An add event names an order id already resting on the same side
    DuplicateOrderId(String),

    /// Startup configuration is unusable
    InvalidConfig {
        /// Description of the error
        message: String,
    },

    /// Failure reading input or writing output
    Io(std::io::Error),

    /// Failure serializing a snapshot
    Serialization(serde_json::Error),
}

impl fmt::Display for PricerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricerError::InvalidTimestamp(timestamp) => {
                write!(f, "Invalid timestamp: {}", timestamp)
            }
            PricerError::MalformedLine { line } => write!(f, "Unparseable line: {}", line),
            PricerError::InvalidPrice(price) => write!(f, "Invalid price: {}", price),
            PricerError::InvalidSize(size) => write!(f, "Invalid size: {}", size),
            PricerError::InvalidSide(side) => write!(f, "Invalid side: {}", side),
            PricerError::DuplicateOrderId(id) => write!(f, "Duplicate order id: {}", id),
            PricerError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            PricerError::Io(err) => write!(f, "I/O error: {}", err),
            PricerError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for PricerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricerError::Io(err) => Some(err),
            PricerError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PricerError {
    fn from(err: std::io::Error) -> Self {
        PricerError::Io(err)
    }
}

impl From<serde_json::Error> for PricerError {
    fn from(err: serde_json::Error) -> Self {
        PricerError::Serialization(err)
    }
}
