use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::models::format_rupiah;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub const ALL: [Self; 2] = [Self::Percentage, Self::Fixed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Percentage => "Persentase",
            Self::Fixed => "Nominal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: DiscountType,
    /// Percent for `Percentage`, Rupiah for `Fixed`.
    pub discount_value: i64,
    #[serde(default)]
    pub min_purchase: i64,
    #[serde(default)]
    pub max_discount: Option<i64>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

impl PromoCode {
    pub fn discount_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", self.discount_value),
            DiscountType::Fixed => format_rupiah(self.discount_value),
        }
    }

    /// Discount granted on `subtotal`, never more than the subtotal itself.
    pub fn discount_for(&self, subtotal: i64) -> i64 {
        if subtotal <= 0 || subtotal < self.min_purchase {
            return 0;
        }

        let raw = match self.discount_type {
            DiscountType::Percentage => subtotal.saturating_mul(self.discount_value.clamp(0, 100)) / 100,
            DiscountType::Fixed => self.discount_value.max(0),
        };
        let capped = self.max_discount.map_or(raw, |cap| raw.min(cap.max(0)));
        capped.min(subtotal)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at.is_none_or(|starts| starts <= now)
    }

    pub fn is_exhausted(&self) -> bool {
        self.usage_limit.is_some_and(|limit| self.used_count >= limit)
    }

    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.has_started(now) && !self.is_expired(now) && !self.is_exhausted()
    }

    /// Share of the usage limit already consumed, `None` when unlimited.
    pub fn usage_rate(&self) -> Option<f64> {
        match self.usage_limit {
            Some(0) => Some(1.0),
            Some(limit) => Some(f64::from(self.used_count) / f64::from(limit)),
            None => None,
        }
    }

    pub fn usage_label(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {limit}", self.used_count),
            None => format!("{} / ∞", self.used_count),
        }
    }
}

impl AdminResource for PromoCode {
    const PATH: &'static str = "promo-codes";
    const NAME: &'static str = "kode promo";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for PromoCode {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "code" => self.code.as_str().into(),
            "description" => self.description.as_str().into(),
            "discount_type" => self.discount_type.label().into(),
            "discount_value" => self.discount_value.into(),
            "min_purchase" => self.min_purchase.into(),
            "used_count" => self.used_count.into(),
            "usage_limit" => self.usage_limit.into(),
            "expires_at" => self.expires_at.into(),
            "is_active" => self.is_active.into(),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn promo(discount_type: DiscountType, value: i64) -> PromoCode {
        PromoCode {
            id: 1,
            code: "NIKAH10".to_string(),
            description: String::new(),
            discount_type,
            discount_value: value,
            min_purchase: 100_000,
            max_discount: None,
            usage_limit: Some(50),
            used_count: 10,
            starts_at: None,
            expires_at: None,
            is_active: true,
        }
    }

    #[test]
    fn percentage_discount_respects_minimum_and_cap() {
        let mut code = promo(DiscountType::Percentage, 10);
        assert_eq!(code.discount_for(50_000), 0);
        assert_eq!(code.discount_for(500_000), 50_000);

        code.max_discount = Some(25_000);
        assert_eq!(code.discount_for(500_000), 25_000);
        assert_eq!(code.discount_label(), "10%");
    }

    #[test]
    fn fixed_discount_never_exceeds_subtotal() {
        let mut code = promo(DiscountType::Fixed, 150_000);
        code.min_purchase = 0;
        assert_eq!(code.discount_for(120_000), 120_000);
        assert_eq!(code.discount_label(), "Rp 150.000");
    }

    #[test]
    fn usability_window_and_limit() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut code = promo(DiscountType::Percentage, 10);
        assert!(code.is_usable(now));
        assert_eq!(code.usage_rate(), Some(0.2));

        code.expires_at = Some(now);
        assert!(code.is_expired(now));
        assert!(!code.is_usable(now));

        code.expires_at = None;
        code.starts_at = Some(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap());
        assert!(!code.is_usable(now));

        code.starts_at = None;
        code.used_count = 50;
        assert!(code.is_exhausted());
        assert!(!code.is_usable(now));

        code.usage_limit = None;
        assert_eq!(code.usage_rate(), None);
        assert_eq!(code.usage_label(), "50 / ∞");
    }
}
