use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Order lifecycle. The storefront walks it linearly (pending → preparing →
/// ready → on-the-way → delivered); the server accepts any of the five
/// states in any direction and leaves ordering to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    OnTheWay,
    Delivered,
}

/// Flavor picks per container (pote), keyed by container index ("1", "2", ...).
pub type FlavorPicks = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: OrderStatus,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub additional_info: String,
    pub payment_method: String,
    /// Size name as it was at order time; may dangle after catalog edits.
    pub size: String,
    pub quantity: u32,
    pub flavors: FlavorPicks,
    /// Frozen at creation; never reconciled against later catalog changes.
    pub price: f64,
    pub transfer_image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub additional_info: String,
    pub payment_method: String,
    pub size: String,
    pub quantity: u32,
    pub flavors: FlavorPicks,
    #[serde(default)]
    pub transfer_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamQuery {
    #[serde(default)]
    pub stream: Option<String>,
}
