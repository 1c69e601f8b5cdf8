use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

/// A digital invitation design customers can personalize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationTemplate {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminResource for InvitationTemplate {
    const PATH: &'static str = "invitation-templates";
    const NAME: &'static str = "template undangan";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for InvitationTemplate {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "slug" => self.slug.as_str().into(),
            "theme" => self.theme.as_str().into(),
            "price" => self.price.into(),
            "is_premium" => self.is_premium.into(),
            "is_active" => self.is_active.into(),
            "usage_count" => self.usage_count.into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}
