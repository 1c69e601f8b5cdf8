//! Figures shown on the dashboard, derived from fetched orders and promo codes.

use std::collections::BTreeMap;

use crate::models::{Order, OrderStatus, PromoCode};
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStats {
    /// Sum of totals over orders that count as revenue.
    pub revenue: i64,
    pub order_count: usize,
    pub revenue_orders: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self {
            order_count: orders.len(),
            ..Self::default()
        };

        for order in orders {
            *stats.by_status.entry(order.status).or_default() += 1;
            if order.status.counts_as_revenue() {
                stats.revenue = stats.revenue.saturating_add(order.total_amount);
                stats.revenue_orders += 1;
            }
        }

        stats
    }

    /// Revenue divided by revenue-counting orders, rounded down.
    pub fn average_order_value(&self) -> i64 {
        match i64::try_from(self.revenue_orders) {
            Ok(count) if count > 0 => self.revenue / count,
            _ => 0,
        }
    }

    /// One row per known status, in lifecycle order, including zero counts.
    pub fn status_counts(&self) -> Vec<StatusCount> {
        OrderStatus::ALL
            .iter()
            .chain(
                self.by_status
                    .contains_key(&OrderStatus::Unknown)
                    .then_some(&OrderStatus::Unknown),
            )
            .map(|&status| StatusCount {
                status,
                count: self.by_status.get(&status).copied().unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

impl RowRecord for StatusCount {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "status" => self.status.label().into(),
            "count" => (self.count as u64).into(),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u64,
    pub revenue: i64,
}

impl RowRecord for ProductSales {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "product_name" => self.product_name.as_str().into(),
            "quantity" => self.quantity.into(),
            "revenue" => self.revenue.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Best sellers by quantity over revenue-counting orders. Ties keep the
/// product that sold first.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut sales: Vec<ProductSales> = Vec::new();

    for item in orders
        .iter()
        .filter(|order| order.status.counts_as_revenue())
        .flat_map(|order| &order.items)
    {
        match sales.iter_mut().find(|s| s.product_name == item.product_name) {
            Some(entry) => {
                entry.quantity += u64::from(item.quantity);
                entry.revenue = entry.revenue.saturating_add(item.subtotal());
            }
            None => sales.push(ProductSales {
                product_name: item.product_name.clone(),
                quantity: u64::from(item.quantity),
                revenue: item.subtotal(),
            }),
        }
    }

    sales.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sales.truncate(limit);
    sales
}

/// Share of limited promo usage consumed across all codes, `None` when no
/// code has a limit.
pub fn promo_usage_rate(codes: &[PromoCode]) -> Option<f64> {
    let (used, limit) = codes
        .iter()
        .filter_map(|code| code.usage_limit.map(|limit| (code.used_count.min(limit), limit)))
        .fold((0_u64, 0_u64), |(used, total), (u, l)| {
            (used + u64::from(u), total + u64::from(l))
        });

    if limit == 0 {
        None
    } else {
        Some(used as f64 / limit as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscountType, OrderItem};

    fn order(id: u64, status: OrderStatus, items: &[(&str, u32, i64)]) -> Order {
        let items: Vec<OrderItem> = items
            .iter()
            .map(|&(name, quantity, unit_price)| OrderItem {
                product_id: None,
                product_name: name.to_string(),
                quantity,
                unit_price,
            })
            .collect();
        Order {
            id,
            order_number: format!("INV-{id:03}"),
            customer_name: "Pelanggan".to_string(),
            customer_email: String::new(),
            status,
            total_amount: items.iter().map(OrderItem::subtotal).sum(),
            discount_amount: 0,
            promo_code: None,
            items,
            created_at: None,
        }
    }

    fn orders() -> Vec<Order> {
        vec![
            order(1, OrderStatus::Paid, &[("Undangan Rustic", 200, 7_500)]),
            order(2, OrderStatus::Completed, &[("Souvenir Kayu", 350, 4_500), ("Undangan Rustic", 100, 7_500)]),
            order(3, OrderStatus::Cancelled, &[("Souvenir Kayu", 1_000, 4_500)]),
            order(4, OrderStatus::Pending, &[("E-Invitation", 1, 150_000)]),
        ]
    }

    #[test]
    fn revenue_excludes_pending_and_cancelled() {
        let stats = OrderStats::from_orders(&orders());
        assert_eq!(stats.order_count, 4);
        assert_eq!(stats.revenue, 1_500_000 + 1_575_000 + 750_000);
        assert_eq!(stats.revenue_orders, 2);
        assert_eq!(stats.average_order_value(), 1_912_500);
    }

    #[test]
    fn status_counts_list_every_status() {
        let counts = OrderStats::from_orders(&orders()).status_counts();
        assert_eq!(counts.len(), OrderStatus::ALL.len());
        assert_eq!(counts[0], StatusCount { status: OrderStatus::Pending, count: 1 });
        assert_eq!(
            counts.iter().find(|c| c.status == OrderStatus::Shipped).map(|c| c.count),
            Some(0)
        );
    }

    #[test]
    fn empty_orders_have_zero_average() {
        let stats = OrderStats::from_orders(&[]);
        assert_eq!(stats.average_order_value(), 0);
    }

    #[test]
    fn top_products_by_quantity() {
        let top = top_products(&orders(), 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_name, "Souvenir Kayu");
        assert_eq!(top[0].quantity, 350);
        assert_eq!(top[1].product_name, "Undangan Rustic");
        assert_eq!(top[1].quantity, 300);
        assert_eq!(top[1].revenue, 2_250_000);

        assert_eq!(top_products(&orders(), 1).len(), 1);
    }

    #[test]
    fn promo_usage_rate_ignores_unlimited_codes() {
        let code = |used, limit| PromoCode {
            id: 1,
            code: "X".to_string(),
            description: String::new(),
            discount_type: DiscountType::Fixed,
            discount_value: 1,
            min_purchase: 0,
            max_discount: None,
            usage_limit: limit,
            used_count: used,
            starts_at: None,
            expires_at: None,
            is_active: true,
        };

        assert_eq!(promo_usage_rate(&[code(5, None)]), None);
        assert_eq!(
            promo_usage_rate(&[code(10, Some(40)), code(30, Some(60)), code(99, None)]),
            Some(0.4)
        );
    }
}
