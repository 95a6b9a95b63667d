//! Order ids for the price levels

use pricelevel::OrderId;
use uuid::Uuid;

/// Namespace for the name-based UUIDs derived from input order ids
const ORDER_NAMESPACE: Uuid = Uuid::NAMESPACE_OID;

/// Map an opaque input order id onto a price-level `OrderId`.
///
/// The mapping is a version 5 UUID of the raw id, so the same input id always
/// lands on the same `OrderId` and nothing has to be stored to look it up again.
pub fn order_id_for(name: &str) -> OrderId {
    OrderId::from_uuid(Uuid::new_v5(&ORDER_NAMESPACE, name.as_bytes()))
}
