use crate::entities::Order;

/// Orders the kitchen still has to prepare, oldest first. Orders without a
/// timestamp go last.
pub fn kitchen_queue(orders: Vec<Order>) -> Vec<Order> {
    let mut queue: Vec<Order> = orders
        .into_iter()
        .filter(|order| order.status.is_open())
        .collect();
    queue.sort_by_key(|order| (order.created_at.is_none(), order.created_at));
    queue
}
