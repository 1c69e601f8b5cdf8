use chrono::NaiveDate;
use serde::Serialize;

use super::{checked, parse_amount, parse_optional, require};
use crate::api::FieldErrors;
use crate::models::{DiscountType, PromoCode};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoCodePayload {
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub min_purchase: i64,
    pub max_discount: Option<i64>,
    pub usage_limit: Option<u32>,
    pub starts_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct PromoCodeForm {
    pub editing: Option<u64>,
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub min_purchase: String,
    pub max_discount: String,
    pub usage_limit: String,
    /// `YYYY-MM-DD`, blank for no bound.
    pub starts_at: String,
    pub expires_at: String,
    pub is_active: bool,
    pub errors: FieldErrors,
}

impl Default for PromoCodeForm {
    fn default() -> Self {
        Self {
            editing: None,
            code: String::new(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: String::new(),
            min_purchase: "0".to_string(),
            max_discount: String::new(),
            usage_limit: String::new(),
            starts_at: String::new(),
            expires_at: String::new(),
            is_active: true,
            errors: FieldErrors::default(),
        }
    }
}

fn format_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(errors: &mut FieldErrors, field: &str, input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Gunakan format tanggal YYYY-MM-DD.");
            None
        }
    }
}

impl PromoCodeForm {
    pub fn edit(promo: &PromoCode) -> Self {
        Self {
            editing: Some(promo.id),
            code: promo.code.clone(),
            description: promo.description.clone(),
            discount_type: promo.discount_type,
            discount_value: promo.discount_value.to_string(),
            min_purchase: promo.min_purchase.to_string(),
            max_discount: promo.max_discount.map(|v| v.to_string()).unwrap_or_default(),
            usage_limit: promo.usage_limit.map(|v| v.to_string()).unwrap_or_default(),
            starts_at: format_date(promo.starts_at),
            expires_at: format_date(promo.expires_at),
            is_active: promo.is_active,
            errors: FieldErrors::default(),
        }
    }

    pub fn validate(&self) -> Result<PromoCodePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let code = self.code.trim().to_uppercase();
        require(&mut errors, "code", &code);
        if !code.is_empty() {
            if !(3..=32).contains(&code.len()) {
                errors.add("code", "Kode harus 3 sampai 32 karakter.");
            }
            if !code.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
                errors.add("code", "Kode hanya boleh huruf, angka, dan tanda hubung.");
            }
        }

        let discount_value = parse_amount(&self.discount_value).filter(|v| *v > 0);
        match (discount_value, self.discount_type) {
            (None, _) => errors.add("discount_value", "Nilai diskon harus lebih dari 0."),
            (Some(v), DiscountType::Percentage) if v > 100 => {
                errors.add("discount_value", "Persentase diskon maksimal 100.");
            }
            _ => {}
        }

        let min_purchase = if self.min_purchase.trim().is_empty() {
            Some(0)
        } else {
            parse_amount(&self.min_purchase)
        };
        if min_purchase.is_none() {
            errors.add("min_purchase", "Minimal belanja harus berupa angka.");
        }

        let max_discount = if self.max_discount.trim().is_empty() {
            None
        } else {
            let parsed = parse_amount(&self.max_discount);
            if parsed.is_none() {
                errors.add("max_discount", "Maksimal diskon harus berupa angka.");
            }
            parsed
        };

        let usage_limit = parse_optional::<u32>(&self.usage_limit).unwrap_or_else(|_| {
            errors.add("usage_limit", "Batas pemakaian harus berupa angka.");
            None
        });

        let starts_at = parse_date(&mut errors, "starts_at", &self.starts_at);
        let expires_at = parse_date(&mut errors, "expires_at", &self.expires_at);
        if let (Some(starts), Some(expires)) = (starts_at, expires_at)
            && expires < starts
        {
            errors.add("expires_at", "Tanggal berakhir harus setelah tanggal mulai.");
        }

        checked(
            PromoCodePayload {
                code,
                description: self.description.trim().to_string(),
                discount_type: self.discount_type,
                discount_value: discount_value.unwrap_or_default(),
                min_purchase: min_purchase.unwrap_or_default(),
                max_discount,
                usage_limit,
                starts_at,
                expires_at,
                is_active: self.is_active,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PromoCodeForm {
        PromoCodeForm {
            code: "nikah10".to_string(),
            discount_value: "10".to_string(),
            starts_at: "2026-06-01".to_string(),
            expires_at: "2026-06-30".to_string(),
            ..PromoCodeForm::default()
        }
    }

    #[test]
    fn normalizes_code_and_parses_dates() {
        let payload = form().validate().unwrap();
        assert_eq!(payload.code, "NIKAH10");
        assert_eq!(payload.discount_value, 10);
        assert_eq!(payload.usage_limit, None);
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["starts_at"],
            serde_json::json!("2026-06-01")
        );
    }

    #[test]
    fn percentage_above_hundred_is_rejected() {
        let mut form = form();
        form.discount_value = "150".to_string();
        assert_eq!(
            form.validate().unwrap_err().first("discount_value"),
            Some("Persentase diskon maksimal 100.")
        );

        form.discount_type = DiscountType::Fixed;
        form.discount_value = "150.000".to_string();
        assert_eq!(form.validate().unwrap().discount_value, 150_000);
    }

    #[test]
    fn reports_every_bad_field() {
        let form = PromoCodeForm {
            code: "a b".to_string(),
            discount_value: "0".to_string(),
            usage_limit: "banyak".to_string(),
            starts_at: "2026-07-01".to_string(),
            expires_at: "2026-06-01".to_string(),
            ..PromoCodeForm::default()
        };
        let errors = form.validate().unwrap_err();
        for field in ["code", "discount_value", "usage_limit", "expires_at"] {
            assert!(errors.contains(field), "missing error for {field}");
        }
    }
}
