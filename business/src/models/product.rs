use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::models::format_rupiah;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Physical,
    Digital,
}

impl ProductType {
    pub const ALL: [Self; 2] = [Self::Physical, Self::Digital];

    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "Fisik",
            Self::Digital => "Digital",
        }
    }
}

/// The category embedded in a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// `None` for variants that have not been saved yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub stock: u32,
    /// Attribute name to chosen value, e.g. `Ukuran -> A5`.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub base_price: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| u64::from(v.stock)).sum()
    }

    /// Lowest and highest variant price, or the base price without variants.
    pub fn price_range(&self) -> (i64, i64) {
        let prices = self.variants.iter().map(|v| v.price);
        match (prices.clone().min(), prices.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => (self.base_price, self.base_price),
        }
    }

    pub fn price_label(&self) -> String {
        match self.price_range() {
            (min, max) if min == max => format_rupiah(min),
            (min, max) => format!("{} - {}", format_rupiah(min), format_rupiah(max)),
        }
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("-", |c| c.name.as_str())
    }
}

impl AdminResource for Product {
    const PATH: &'static str = "products";
    const NAME: &'static str = "produk";
    const PAGINATED: bool = true;

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for Product {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "slug" => self.slug.as_str().into(),
            "product_type" => self.product_type.label().into(),
            "category" => self.category_name().into(),
            "base_price" => self.base_price.into(),
            "price" => self.price_range().0.into(),
            "stock" => self.total_stock().into(),
            "variants" => (self.variants.len() as u64).into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(sku: &str, price: i64, stock: u32) -> ProductVariant {
        ProductVariant {
            sku: sku.to_string(),
            price,
            stock,
            ..ProductVariant::default()
        }
    }

    #[test]
    fn deserializes_listing_row() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 11,
                "name": "Undangan Rustic",
                "product_type": "physical",
                "category": {"id": 2, "name": "Undangan Cetak"},
                "base_price": 7500,
                "variants": [
                    {"id": 1, "sku": "RST-A5", "price": 7500, "stock": 300, "attributes": {"Ukuran": "A5"}},
                    {"id": 2, "sku": "RST-A4", "price": 9500, "stock": 120}
                ]
            }"#,
        )
        .unwrap();

        assert!(product.is_active);
        assert_eq!(product.total_stock(), 420);
        assert_eq!(product.price_label(), "Rp 7.500 - Rp 9.500");
        assert_eq!(product.field("category"), CellValue::from("Undangan Cetak"));
        assert_eq!(product.field("product_type"), CellValue::from("Fisik"));
    }

    #[test]
    fn price_falls_back_to_base_price() {
        let mut product: Product =
            serde_json::from_str(r#"{"id":1,"name":"E-Invitation","product_type":"digital","base_price":150000}"#)
                .unwrap();
        assert_eq!(product.price_label(), "Rp 150.000");
        assert_eq!(product.category_name(), "-");

        product.variants = vec![variant("A", 10_000, 1), variant("B", 10_000, 2)];
        assert_eq!(product.price_label(), "Rp 10.000");
    }
}
