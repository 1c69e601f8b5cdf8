use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub products_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminResource for Category {
    const PATH: &'static str = "categories";
    const NAME: &'static str = "kategori";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for Category {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "slug" => self.slug.as_str().into(),
            "description" => self.description.clone().into(),
            "parent_id" => self.parent_id.into(),
            "products_count" => self.products_count.into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}
