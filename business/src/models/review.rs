use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub product_name: String,
    pub customer_name: String,
    /// 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    pub fn approval_label(&self) -> &'static str {
        if self.is_approved { "Disetujui" } else { "Menunggu" }
    }
}

impl AdminResource for Review {
    const PATH: &'static str = "reviews";
    const NAME: &'static str = "ulasan";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for Review {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "product_name" => self.product_name.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "rating" => self.rating.into(),
            "comment" => self.comment.as_str().into(),
            "is_approved" => self.is_approved.into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_clamp_to_five() {
        let mut review: Review = serde_json::from_str(
            r#"{"id":1,"customer_name":"Dewi","rating":4,"comment":"Cantik sekali"}"#,
        )
        .unwrap();
        assert_eq!(review.stars(), "★★★★☆");
        assert_eq!(review.approval_label(), "Menunggu");

        review.rating = 9;
        assert_eq!(review.stars(), "★★★★★");
    }
}
