//! # Target-Size Order Book Pricer
//!
//! Reads a stream of order book events for a single instrument and, after each
//! event, prices a fixed target quantity against the best resting orders on
//! each side of the book. A side's price is reported only when it changes.
//!
//! ## Input
//!
//! One event per line, fields separated by whitespace:
//!
//! ```text
//! <timestamp> A <order-id> <B|S> <price> <size>    add a resting order
//! <timestamp> R <order-id> <size>                  reduce or remove an order
//! ```
//!
//! Prices carry up to two decimals and are held as integer hundredths from the
//! moment they are parsed; no floating point is involved anywhere. A reduce
//! does not name a side: the order is looked up on the bid side first, then on
//! the ask side, and silently ignored if neither holds it.
//!
//! ## Output
//!
//! ```text
//! <timestamp> <B|S> <total|NA>
//! ```
//!
//! `total` is the sum of `price * size` over the best orders needed to fill the
//! target size, printed with two decimals. `NA` means the side does not hold
//! enough resting size.
//!
//! Buy orders are reported under `S` (the proceeds of selling the target size
//! into the bids) and sell orders under `B` (the cost of buying the target size
//! from the asks).
//!
//! ## Example
//!
//! ```
//! use target_pricer::Pricer;
//!
//! let mut pricer = Pricer::with_target_size(200).unwrap();
//! assert!(pricer.handle_line("28800562 A c B 44.10 100").unwrap().is_none());
//! let emission = pricer.handle_line("28800758 A d B 44.18 157").unwrap().unwrap();
//! assert_eq!(emission.to_string(), "28800758 S 8832.56");
//! ```
//!
//! ## Design
//!
//! - [`OrderBookSide`] is one component used for both sides, configured with
//!   the resting side (which decides price priority) and the report label.
//! - Each side keeps `pricelevel::PriceLevel`s in a `BTreeMap`, plus an id
//!   index so reduces do not scan the whole book. Input order ids are opaque
//!   strings and are mapped onto the levels' `OrderId`s through name-based
//!   UUIDs.
//! - The quote is recomputed by walking the book from the best price after each
//!   mutation. The walk stops once the target is filled, so its cost is bounded
//!   by the number of levels needed to reach the target.
//! - Everything is single-threaded and synchronous; one event is fully applied
//!   before the next is read.

pub mod orderbook;
pub mod pricer;

mod utils;

pub use orderbook::{Order, OrderBookSide, PricerError, SideSnapshot, TargetQuote, side_code};
pub use pricer::{BookEvent, Emission, Pricer, PricerConfig, PricerSnapshot, PricerStats};
pub use utils::{current_time_millis, format_hundredths, parse_price, setup_logger};
