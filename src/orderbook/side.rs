//! One side of the order book and its target-size pricing

use super::order::Order;
use super::quote::TargetQuote;
use super::snapshot::SideSnapshot;
use crate::utils::order_id_for;
use pricelevel::{OrderId, OrderType, OrderUpdate, PriceLevel, Side, TimeInForce};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

/// Single-letter code used for a side on the wire (`B` or `S`)
pub fn side_code(side: Side) -> &'static str {
    match side {
        Side::Buy => "B",
        Side::Sell => "S",
    }
}

/// Resting size at a level, summed from its orders.
///
/// Kept wide so any number of `u64` sizes at one price adds up exactly.
fn resting_size(level: &PriceLevel) -> u128 {
    level
        .iter_orders()
        .iter()
        .map(|order| u128::from(order.visible_quantity()))
        .sum()
}

/// Resting orders for one side of the book, kept in price-time priority,
/// together with the cost of filling `target_size` units from the best of them.
///
/// Bids (`Side::Buy`) rank higher prices first and asks (`Side::Sell`) rank
/// lower prices first. Orders at the same price keep arrival order. Each
/// mutation re-prices the target size and reports the new value only when it
/// differs from the last one reported.
#[derive(Debug)]
pub struct OrderBookSide {
    /// Which resting orders this side holds; decides the price priority
    side: Side,

    /// Label attached to this side's reports
    label: Side,

    /// Quantity priced after every mutation
    target_size: u64,

    /// Price levels keyed by price; priority order is decided by `side`
    levels: BTreeMap<u64, PriceLevel>,

    /// Order id to its price and input id
    order_locations: HashMap<OrderId, (u64, String)>,

    /// Arrival stamp for the next order. Levels list orders by stamp, so a
    /// partially reduced order keeps its place at its price.
    next_arrival: u64,

    /// Last value handed out by `add` or `reduce`
    last_reported: TargetQuote,
}

impl OrderBookSide {
    /// Create an empty side. Nothing has been reported yet, which counts as `NA`.
    pub fn new(side: Side, label: Side, target_size: u64) -> Self {
        Self {
            side,
            label,
            target_size,
            levels: BTreeMap::new(),
            order_locations: HashMap::new(),
            next_arrival: 0,
            last_reported: TargetQuote::NotAvailable,
        }
    }

    /// Resting buy orders. Their cost is reported under the `S` label, the
    /// side a seller hitting these bids would be on.
    pub fn bids(target_size: u64) -> Self {
        Self::new(Side::Buy, Side::Sell, target_size)
    }

    /// Resting sell orders, reported under the `B` label.
    pub fn asks(target_size: u64) -> Self {
        Self::new(Side::Sell, Side::Buy, target_size)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn label(&self) -> Side {
        self.label
    }

    pub fn target_size(&self) -> u64 {
        self.target_size
    }

    /// The value most recently reported, `NA` before any report
    pub fn last_reported(&self) -> TargetQuote {
        self.last_reported
    }

    /// Add a resting order behind every order at an equal or better price.
    ///
    /// Returns the new quote if it differs from the last reported one. An order
    /// with zero size cannot rest and leaves the side untouched, and so does an
    /// id that is already resting here.
    pub fn add(&mut self, id: &str, price: u64, size: u64) -> Option<TargetQuote> {
        if size == 0 {
            trace!(
                "Side {}: ignoring zero-size order {} at {}",
                side_code(self.side),
                id,
                price
            );
            return None;
        }
        let order_id = order_id_for(id);
        if self.order_locations.contains_key(&order_id) {
            warn!(
                "Side {}: order {} is already resting, add ignored",
                side_code(self.side),
                id
            );
            return None;
        }

        trace!(
            "Side {}: adding order {} price {} size {}",
            side_code(self.side),
            id,
            price,
            size
        );
        let order = OrderType::Standard {
            id: order_id,
            price,
            quantity: size,
            side: self.side,
            timestamp: self.next_arrival,
            time_in_force: TimeInForce::Gtc,
            extra_fields: (),
        };
        self.next_arrival += 1;

        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .add_order(order);
        self.order_locations.insert(order_id, (price, id.to_string()));

        self.refresh()
    }

    /// Reduce a resting order by `size`, removing it when `size` covers what
    /// is left. Unknown ids are a no-op.
    pub fn reduce(&mut self, id: &str, size: u64) -> Option<TargetQuote> {
        let order_id = order_id_for(id);
        let Some(price) = self.order_locations.get(&order_id).map(|(price, _)| *price) else {
            trace!(
                "Side {}: reduce for unknown order {} ignored",
                side_code(self.side),
                id
            );
            return None;
        };
        let level = self.levels.get(&price)?;
        let resident = level
            .iter_orders()
            .iter()
            .find(|order| order.id() == order_id)
            .map(|order| order.visible_quantity())?;

        trace!(
            "Side {}: reducing order {} at {} by {}",
            side_code(self.side),
            id,
            price,
            size
        );
        let exhausted = size >= resident;
        let update = if exhausted {
            OrderUpdate::Cancel { order_id }
        } else {
            OrderUpdate::UpdateQuantity {
                order_id,
                new_quantity: resident - size,
            }
        };

        match level.update_order(update) {
            Ok(Some(_)) => {}
            Ok(None) => return None,
            Err(err) => {
                warn!(
                    "Side {}: failed to reduce order {}: {}",
                    side_code(self.side),
                    id,
                    err
                );
                return None;
            }
        }

        if exhausted {
            self.order_locations.remove(&order_id);
            if level.order_count() == 0 {
                self.levels.remove(&price);
            }
        }

        self.refresh()
    }

    /// Whether an order with this id is resting on this side
    pub fn has_order(&self, id: &str) -> bool {
        self.order_locations.contains_key(&order_id_for(id))
    }

    /// Look up a resting order by id
    pub fn get_order(&self, id: &str) -> Option<Order> {
        let order_id = order_id_for(id);
        let (price, _) = self.order_locations.get(&order_id)?;
        self.levels
            .get(price)?
            .iter_orders()
            .iter()
            .find(|order| order.id() == order_id)
            .map(|order| Order::from_level(id, order))
    }

    /// Best resting price, if any
    pub fn best_price(&self) -> Option<u64> {
        self.levels_by_priority().next().map(PriceLevel::price)
    }

    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total resting size across every level
    pub fn total_size(&self) -> u128 {
        self.levels.values().map(resting_size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Resting orders in priority order: best price first, arrival order within a price
    pub fn orders(&self) -> impl Iterator<Item = Order> + '_ {
        self.levels_by_priority()
            .flat_map(|level| level.iter_orders())
            .filter_map(move |order| {
                let (_, name) = self.order_locations.get(&order.id())?;
                Some(Order::from_level(name, &order))
            })
    }

    /// Price the target size against the current book.
    ///
    /// Walks the book from the best price, taking `min(remaining, size)` at each
    /// step until the target is filled. Running out of orders first yields `NA`.
    pub fn compute_quote(&self) -> TargetQuote {
        let mut remaining = u128::from(self.target_size);
        let mut total: u128 = 0;

        for level in self.levels_by_priority() {
            if remaining == 0 {
                break;
            }
            let used = remaining.min(resting_size(level));
            total += u128::from(level.price()) * used;
            remaining -= used;
        }

        if remaining == 0 {
            TargetQuote::Amount(total)
        } else {
            TargetQuote::NotAvailable
        }
    }

    /// Snapshot of the top `depth` price levels
    pub fn snapshot(&self, depth: usize) -> SideSnapshot {
        let levels: Vec<_> = self
            .levels_by_priority()
            .take(depth)
            .map(PriceLevel::snapshot)
            .collect();
        let order_names = levels
            .iter()
            .flat_map(|level| level.iter_orders())
            .filter_map(|order| {
                let (_, name) = self.order_locations.get(&order.id())?;
                Some((order.id().to_string(), name.clone()))
            })
            .collect();

        SideSnapshot {
            side: side_code(self.side).to_string(),
            label: side_code(self.label).to_string(),
            target_size: self.target_size,
            last_reported: self.last_reported,
            order_count: self.order_count(),
            levels,
            order_names,
        }
    }

    fn levels_by_priority(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Recompute the quote and hand it out only if it moved
    fn refresh(&mut self) -> Option<TargetQuote> {
        let quote = self.compute_quote();
        if quote == self.last_reported {
            return None;
        }

        debug!(
            "Side {}: quote for {} moved from {} to {}",
            side_code(self.label),
            self.target_size,
            self.last_reported,
            quote
        );
        self.last_reported = quote;
        Some(quote)
    }
}
