use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Shipped,
    Completed,
    Cancelled,
    /// A status this console does not know yet.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Paid,
        Self::Processing,
        Self::Shipped,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Menunggu Pembayaran",
            Self::Paid => "Dibayar",
            Self::Processing => "Diproses",
            Self::Shipped => "Dikirim",
            Self::Completed => "Selesai",
            Self::Cancelled => "Dibatalkan",
            Self::Unknown => "Tidak Diketahui",
        }
    }

    /// Paid orders and everything after them, except cancellations.
    pub fn counts_as_revenue(self) -> bool {
        matches!(
            self,
            Self::Paid | Self::Processing | Self::Shipped | Self::Completed
        )
    }

    /// Statuses an admin may move the order to from here.
    pub fn next_statuses(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Paid, Self::Cancelled],
            Self::Paid => &[Self::Processing, Self::Cancelled],
            Self::Processing => &[Self::Shipped, Self::Cancelled],
            Self::Shipped => &[Self::Completed],
            Self::Completed | Self::Cancelled | Self::Unknown => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<u64>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl OrderItem {
    pub fn subtotal(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub order_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub status: OrderStatus,
    pub total_amount: i64,
    #[serde(default)]
    pub discount_amount: i64,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl AdminResource for Order {
    const PATH: &'static str = "orders";
    const NAME: &'static str = "pesanan";
    const PAGINATED: bool = true;

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for Order {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "order_number" => self.order_number.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "customer_email" => self.customer_email.as_str().into(),
            // Sorting by status follows the order lifecycle, not the label.
            "status" => (self.status as u8).into(),
            "status_label" => self.status.label().into(),
            "total_amount" => self.total_amount.into(),
            "discount_amount" => self.discount_amount.into(),
            "promo_code" => self.promo_code.clone().into(),
            "items" => self.item_count().into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_tolerated() {
        let order: Order = serde_json::from_str(
            r#"{"id":1,"order_number":"INV-001","customer_name":"Sari","status":"refunded","total_amount":100000}"#,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(order.status.next_statuses().is_empty());
        assert!(!order.status.counts_as_revenue());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OrderStatus::Shipped).unwrap(), r#""shipped""#);
    }

    #[test]
    fn lifecycle_transitions() {
        assert_eq!(
            OrderStatus::Pending.next_statuses(),
            &[OrderStatus::Paid, OrderStatus::Cancelled]
        );
        assert_eq!(OrderStatus::Shipped.next_statuses(), &[OrderStatus::Completed]);
        assert!(OrderStatus::Completed.next_statuses().is_empty());
        assert!(OrderStatus::Processing.counts_as_revenue());
        assert!(!OrderStatus::Cancelled.counts_as_revenue());
    }

    #[test]
    fn item_totals() {
        let item = OrderItem {
            product_id: Some(3),
            product_name: "Souvenir Kayu".to_string(),
            quantity: 150,
            unit_price: 4_500,
        };
        assert_eq!(item.subtotal(), 675_000);
    }
}
