use time::OffsetDateTime;

use crate::catalog;
use crate::store::{FileStore, ORDERS_FILE};

use super::dto::{CreateOrderRequest, Order, OrderStatus};

pub async fn load(files: &FileStore) -> Vec<Order> {
    files.read_or_default(ORDERS_FILE).await
}

/// Strict variant for the single-order fetch and its stream, where a read
/// failure must be visible instead of looking like an empty shop.
pub async fn try_load(files: &FileStore) -> anyhow::Result<Vec<Order>> {
    files.read(ORDERS_FILE).await
}

pub async fn save(files: &FileStore, orders: &[Order]) -> anyhow::Result<()> {
    files.write(ORDERS_FILE, orders).await
}

pub async fn find(files: &FileStore, id: &str) -> anyhow::Result<Option<Order>> {
    let orders = try_load(files).await?;
    Ok(orders.into_iter().find(|order| order.id == id))
}

/// Stamps id, timestamp and the initial status, and prices the order against
/// the current catalog. The price is frozen here and never recomputed.
pub async fn create(files: &FileStore, req: CreateOrderRequest) -> anyhow::Result<Order> {
    let now = OffsetDateTime::now_utc();
    let unit_price = catalog::repo::price_for(files, &req.size).await;
    let order = Order {
        id: (now.unix_timestamp_nanos() / 1_000_000).to_string(),
        created_at: now,
        status: OrderStatus::Pending,
        customer_name: req.customer_name,
        phone: req.phone,
        address: req.address,
        additional_info: req.additional_info,
        payment_method: req.payment_method,
        size: req.size,
        quantity: req.quantity,
        flavors: req.flavors,
        price: unit_price * f64::from(req.quantity),
        transfer_image: req.transfer_image,
    };

    let mut orders = load(files).await;
    orders.push(order.clone());
    save(files, &orders).await?;
    Ok(order)
}

/// No transition check: any of the five states is accepted, in any
/// direction. An id with no match is not an error; the list is written back
/// unchanged and the caller still hears success.
pub async fn set_status(files: &FileStore, id: &str, status: OrderStatus) -> anyhow::Result<()> {
    let mut orders = load(files).await;
    for order in orders.iter_mut().filter(|order| order.id == id) {
        order.status = status;
    }
    save(files, &orders).await
}

/// Deleting a missing id still succeeds; the list is simply rewritten as-is.
pub async fn delete(files: &FileStore, id: &str) -> anyhow::Result<()> {
    let mut orders = load(files).await;
    orders.retain(|order| order.id != id);
    save(files, &orders).await
}

pub fn sorted_by_created_at(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|order| order.created_at);
    orders
}
