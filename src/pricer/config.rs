use crate::orderbook::PricerError;

/// Startup configuration shared by both sides of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricerConfig {
    target_size: u64,
}

impl PricerConfig {
    /// Validate the target size; it has to be a positive quantity
    pub fn new(target_size: u64) -> Result<Self, PricerError> {
        if target_size == 0 {
            return Err(PricerError::InvalidConfig {
                message: "target size must be a positive integer".to_string(),
            });
        }
        Ok(Self { target_size })
    }

    pub fn target_size(&self) -> u64 {
        self.target_size
    }
}
