//! Mock e-commerce tool functions.
//!
//! Pure computations: no backing store exists for orders or returns, every
//! result is synthesized from the order id on demand. Order ids are treated
//! as opaque strings; empty or malformed input never fails.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

const STATUSES: [&str; 5] = [
    "Preparing",
    "Shipped",
    "Delivered",
    "Processing",
    "Out for Delivery",
];

/// Status text for an order. Deterministic within a process: the same id
/// always maps to the same status.
pub fn order_status(order_id: &str) -> String {
    let mut hasher = DefaultHasher::new();
    order_id.hash(&mut hasher);
    let status = STATUSES[(hasher.finish() % STATUSES.len() as u64) as usize];

    match status {
        "Shipped" => format!("Order {order_id} is Shipped. Expected delivery in 2-3 business days."),
        "Delivered" => format!("Order {order_id} was Delivered on the expected date."),
        "Out for Delivery" => {
            format!("Order {order_id} is Out for Delivery. It should arrive today!")
        }
        _ => format!("Order {order_id} is currently {status}."),
    }
}

/// Confirmation text for a return request. Always succeeds; the fake return
/// id combines the uppercased tail of the order id with a random 4-digit
/// number. Ids shorter than four characters use whatever exists.
pub fn start_return(order_id: &str) -> String {
    let chars: Vec<char> = order_id.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..]
        .iter()
        .collect::<String>()
        .to_uppercase();
    let return_id = format!("RET-{tail}-{}", rand::thread_rng().gen_range(1000..=9999));

    format!(
        "Return request created successfully for order {order_id}. \
         Your return ID is {return_id}. \
         Please ship the item within 14 days using the prepaid label we'll email you."
    )
}
