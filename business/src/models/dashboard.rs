use serde::{Deserialize, Serialize};

use crate::models::Order;

/// Aggregates served by `/admin/dashboard`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_revenue: i64,
    pub total_orders: u64,
    pub total_products: u64,
    pub total_customers: u64,
    pub pending_reviews: u64,
    pub pending_contents: u64,
    pub recent_orders: Vec<Order>,
}
