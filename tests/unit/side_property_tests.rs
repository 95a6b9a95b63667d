//! Invariants of a single book side under long operation sequences

use pricelevel::Side;
use target_pricer::{Order, OrderBookSide, TargetQuote};

#[cfg(test)]
mod side_property_tests {
    use super::*;

    // Deterministic pseudo-random sequence so failures reproduce
    fn next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *state >> 33
    }

    // Brute-force reference: walk orders in priority order one by one
    fn reference_quote(side: &OrderBookSide) -> TargetQuote {
        let mut remaining = side.target_size();
        let mut total: u128 = 0;
        for order in side.orders() {
            if remaining == 0 {
                break;
            }
            let used = remaining.min(order.size());
            total += u128::from(order.price()) * u128::from(used);
            remaining -= used;
        }
        if remaining == 0 {
            TargetQuote::Amount(total)
        } else {
            TargetQuote::NotAvailable
        }
    }

    fn exercise(mut side: OrderBookSide, seed: u64) {
        let mut state = seed;
        let mut resident: Vec<String> = Vec::new();
        let mut reported = TargetQuote::NotAvailable;

        for step in 0..2_000u64 {
            let result = if resident.is_empty() || next(&mut state) % 3 != 0 {
                let id = format!("o{step}");
                let price = 4000 + next(&mut state) % 50;
                let size = 1 + next(&mut state) % 120;
                resident.push(id.clone());
                side.add(&id, price, size)
            } else {
                let index = (next(&mut state) as usize) % resident.len();
                let id = resident[index].clone();
                let size = 1 + next(&mut state) % 150;
                let result = side.reduce(&id, size);
                if !side.has_order(&id) {
                    resident.swap_remove(index);
                }
                result
            };

            // Sorted by price priority, FIFO within a price
            let orders: Vec<Order> = side.orders().collect();
            for pair in orders.windows(2) {
                match side.side() {
                    Side::Buy => assert!(pair[0].price() >= pair[1].price()),
                    Side::Sell => assert!(pair[0].price() <= pair[1].price()),
                }
                if pair[0].price() == pair[1].price() {
                    let first: u64 = pair[0].id()[1..].parse().unwrap();
                    let second: u64 = pair[1].id()[1..].parse().unwrap();
                    assert!(first < second, "FIFO broken at step {step}");
                }
                assert!(pair[0].size() > 0);
            }
            assert_eq!(orders.len(), resident.len());

            // Level walk agrees with an order-by-order walk
            let expected = reference_quote(&side);
            assert_eq!(side.last_reported(), expected, "step {step}");

            // Emission happens exactly when the quote moves
            match result {
                Some(quote) => {
                    assert_ne!(quote, reported);
                    reported = quote;
                }
                None => assert_eq!(expected, reported),
            }
        }
    }

    #[test]
    fn test_bid_side_invariants() {
        exercise(OrderBookSide::bids(250), 7);
    }

    #[test]
    fn test_ask_side_invariants() {
        exercise(OrderBookSide::asks(250), 11);
    }

    #[test]
    fn test_redundant_reduce_is_idempotent() {
        let mut side = OrderBookSide::asks(10);
        side.add("a", 100, 10);
        side.add("b", 200, 10);
        assert_eq!(side.reduce("a", 10), Some(TargetQuote::Amount(2000)));

        let before: Vec<Order> = side.orders().collect();
        assert_eq!(side.reduce("a", 10), None);
        assert_eq!(side.reduce("a", 1), None);
        let after: Vec<Order> = side.orders().collect();
        assert_eq!(before, after);
    }
}
