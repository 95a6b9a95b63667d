//! Resting order as seen from one side of the book

use pricelevel::OrderType;

/// A resting order under its input id. Price and id are fixed once created;
/// size only shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: String,
    price: u64,
    size: u64,
}

impl Order {
    /// Create a new order
    pub fn new(id: impl Into<String>, price: u64, size: u64) -> Self {
        Self {
            id: id.into(),
            price,
            size,
        }
    }

    /// View of a price-level order under its input id
    pub(crate) fn from_level(id: &str, order: &OrderType<()>) -> Self {
        Self::new(id, order.price(), order.visible_quantity())
    }

    /// Get the order id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the price in hundredths
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Get the remaining size
    pub fn size(&self) -> u64 {
        self.size
    }
}
