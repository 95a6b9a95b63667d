//! Routing of parsed events to the two sides of the book

use super::config::PricerConfig;
use super::event::{BookEvent, Emission};
use super::snapshot::PricerSnapshot;
use super::stats::PricerStats;
use crate::orderbook::{OrderBookSide, PricerError};
use crate::utils::current_time_millis;
use pricelevel::Side;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, trace, warn};

/// Feeds a stream of add/reduce events into a bid side and an ask side, and
/// reports whichever side's target-size quote moved.
///
/// Buy orders rest on the bid side, which reports under `S`; sell orders rest
/// on the ask side, which reports under `B`.
#[derive(Debug)]
pub struct Pricer {
    config: PricerConfig,
    bids: OrderBookSide,
    asks: OrderBookSide,
    stats: PricerStats,
}

impl Pricer {
    pub fn new(config: PricerConfig) -> Self {
        Self {
            config,
            bids: OrderBookSide::bids(config.target_size()),
            asks: OrderBookSide::asks(config.target_size()),
            stats: PricerStats::default(),
        }
    }

    /// Shorthand for `Pricer::new(PricerConfig::new(target_size)?)`
    pub fn with_target_size(target_size: u64) -> Result<Self, PricerError> {
        Ok(Self::new(PricerConfig::new(target_size)?))
    }

    pub fn config(&self) -> PricerConfig {
        self.config
    }

    /// Resting buy orders
    pub fn bids(&self) -> &OrderBookSide {
        &self.bids
    }

    /// Resting sell orders
    pub fn asks(&self) -> &OrderBookSide {
        &self.asks
    }

    pub fn stats(&self) -> PricerStats {
        self.stats
    }

    /// Parse and apply one input line.
    ///
    /// Blank lines and reduces for unknown orders yield `Ok(None)`. A line that
    /// cannot be parsed, or an add reusing an id already resting on the same
    /// side, yields an error and leaves the book unchanged.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Emission>, PricerError> {
        self.stats.lines_read += 1;

        let result = match BookEvent::parse(line) {
            Ok(Some(event)) => self.apply(event),
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };

        match &result {
            Ok(Some(_)) => self.stats.emissions += 1,
            Ok(None) => {}
            Err(_) => self.stats.lines_rejected += 1,
        }
        result
    }

    /// Apply an already parsed event
    pub fn apply(&mut self, event: BookEvent) -> Result<Option<Emission>, PricerError> {
        let timestamp = event.timestamp();

        let (book, quote) = match event {
            BookEvent::Add {
                id,
                side,
                price,
                size,
                ..
            } => {
                let book = match side {
                    Side::Buy => &mut self.bids,
                    Side::Sell => &mut self.asks,
                };
                if book.has_order(&id) {
                    return Err(PricerError::DuplicateOrderId(id));
                }
                let quote = book.add(&id, price, size);
                (book, quote)
            }
            BookEvent::Reduce { id, size, .. } => {
                let book = if self.bids.has_order(&id) {
                    &mut self.bids
                } else if self.asks.has_order(&id) {
                    &mut self.asks
                } else {
                    debug!("Reduce at {} for unknown order {} ignored", timestamp, id);
                    self.stats.unknown_reductions += 1;
                    return Ok(None);
                };
                let quote = book.reduce(&id, size);
                (book, quote)
            }
        };
        self.stats.events_applied += 1;

        let emission = quote.map(|quote| Emission {
            timestamp,
            label: book.label(),
            quote,
        });
        trace!("Event at {} produced {:?}", timestamp, emission);
        Ok(emission)
    }

    /// Process every line from `reader`, writing one line per emission to `writer`.
    ///
    /// Unparseable lines are logged and skipped, including lines that are not
    /// valid UTF-8. I/O failures stop processing.
    pub fn process<R, W>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<PricerStats, PricerError>
    where
        R: BufRead,
        W: Write,
    {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buffer);
            let line = text.trim_end_matches(['\n', '\r']);

            // Replacement characters would turn raw bytes into a different order id
            let result = match &text {
                Cow::Borrowed(_) => self.handle_line(line),
                Cow::Owned(_) => self.reject_line(PricerError::MalformedLine {
                    line: line.to_string(),
                }),
            };
            match result {
                Ok(Some(emission)) => writeln!(writer, "{}", emission)?,
                Ok(None) => {}
                Err(err) => warn!(line = %line, "Skipping input: {}", err),
            }
        }
        writer.flush()?;
        Ok(self.stats)
    }

    /// Count a line that never reached the parser
    fn reject_line(&mut self, err: PricerError) -> Result<Option<Emission>, PricerError> {
        self.stats.lines_read += 1;
        self.stats.lines_rejected += 1;
        Err(err)
    }

    /// Snapshot of both sides, `depth` levels each
    pub fn snapshot(&self, depth: usize) -> PricerSnapshot {
        PricerSnapshot {
            timestamp: current_time_millis(),
            target_size: self.config.target_size(),
            bids: self.bids.snapshot(depth),
            asks: self.asks.snapshot(depth),
            stats: self.stats,
        }
    }
}
