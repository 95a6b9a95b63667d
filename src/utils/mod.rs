mod ids;
mod logger;
mod price;
mod time;

pub use ids::order_id_for;
pub use logger::setup_logger;
pub use price::{format_hundredths, parse_price};
pub use time::current_time_millis;
