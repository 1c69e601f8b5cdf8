use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

/// A variant dimension such as "Ukuran" or "Warna Kertas".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Attribute {
    pub fn values_summary(&self) -> String {
        self.values.join(", ")
    }
}

impl AdminResource for Attribute {
    const PATH: &'static str = "attributes";
    const NAME: &'static str = "atribut";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for Attribute {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "values" => self.values_summary().into(),
            "values_count" => (self.values.len() as u64).into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}
