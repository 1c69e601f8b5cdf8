//! Multi-step product editor: basic info, then variants, then a review of
//! everything before submit.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::{checked, parse_amount, parse_optional, require, slugify};
use crate::api::FieldErrors;
use crate::models::{Product, ProductType, ProductVariant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductStep {
    #[default]
    Basic,
    Variants,
    Review,
}

impl ProductStep {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Variants, Self::Review];

    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Informasi Dasar",
            Self::Variants => "Varian",
            Self::Review => "Tinjau",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Basic => Self::Variants,
            Self::Variants | Self::Review => Self::Review,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Basic | Self::Variants => Self::Basic,
            Self::Review => Self::Variants,
        }
    }

    /// The step that owns a (possibly server-side) error field.
    fn for_field(field: &str) -> Self {
        if field == "variants" || field.starts_with("variants.") {
            Self::Variants
        } else {
            Self::Basic
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDraft {
    pub id: Option<u64>,
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    /// Attribute name and chosen value pairs.
    pub attributes: Vec<(String, String)>,
}

impl VariantDraft {
    fn from_variant(variant: &ProductVariant) -> Self {
        Self {
            id: variant.id,
            sku: variant.sku.clone(),
            name: variant.name.clone(),
            price: variant.price.to_string(),
            stock: variant.stock.to_string(),
            attributes: variant
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub product_type: ProductType,
    pub category_id: Option<u64>,
    pub base_price: i64,
    pub is_active: bool,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Clone)]
pub struct ProductForm {
    pub editing: Option<u64>,
    pub step: ProductStep,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub product_type: ProductType,
    pub category_id: Option<u64>,
    pub base_price: String,
    pub is_active: bool,
    pub variants: Vec<VariantDraft>,
    pub errors: FieldErrors,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            editing: None,
            step: ProductStep::Basic,
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            product_type: ProductType::Physical,
            category_id: None,
            base_price: String::new(),
            is_active: true,
            variants: Vec::new(),
            errors: FieldErrors::default(),
        }
    }
}

impl ProductForm {
    pub fn edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id),
            step: ProductStep::Basic,
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            product_type: product.product_type,
            category_id: product.category.as_ref().map(|c| c.id),
            base_price: product.base_price.to_string(),
            is_active: product.is_active,
            variants: product.variants.iter().map(VariantDraft::from_variant).collect(),
            errors: FieldErrors::default(),
        }
    }

    pub fn add_variant(&mut self) {
        self.variants.push(VariantDraft {
            price: self.base_price.clone(),
            stock: "0".to_string(),
            ..VariantDraft::default()
        });
    }

    pub fn remove_variant(&mut self, index: usize) {
        if index < self.variants.len() {
            self.variants.remove(index);
        }
    }

    /// Validates the current step and advances when it is clean.
    pub fn next(&mut self) -> bool {
        self.errors = self.step_errors(self.step);
        if self.errors.is_empty() && self.step != ProductStep::Review {
            self.step = self.step.next();
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) {
        self.step = self.step.prev();
    }

    /// Merges errors returned by the API and jumps to the earliest step that
    /// has one.
    pub fn apply_server_errors(&mut self, errors: &FieldErrors) {
        self.errors.merge(errors);
        if let Some(step) = errors.iter().map(|(field, _)| ProductStep::for_field(field)).min() {
            self.step = step;
        }
    }

    pub fn step_errors(&self, step: ProductStep) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            ProductStep::Basic => self.check_basic(&mut errors),
            ProductStep::Variants => {
                self.check_variants(&mut errors);
            }
            ProductStep::Review => {
                self.check_basic(&mut errors);
                self.check_variants(&mut errors);
            }
        }
        errors
    }

    fn check_basic(&self, errors: &mut FieldErrors) {
        require(errors, "name", &self.name);
        if self.category_id.is_none() {
            errors.add("category_id", "Pilih kategori.");
        }
        if parse_amount(&self.base_price).is_none() {
            errors.add("base_price", "Harga dasar harus berupa angka.");
        }
    }

    fn check_variants(&self, errors: &mut FieldErrors) -> Vec<ProductVariant> {
        if self.product_type == ProductType::Physical && self.variants.is_empty() {
            errors.add("variants", "Produk fisik memerlukan minimal satu varian.");
        }

        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(self.variants.len());

        for (i, draft) in self.variants.iter().enumerate() {
            let sku = draft.sku.trim().to_uppercase();
            if sku.is_empty() {
                errors.add(format!("variants.{i}.sku"), super::REQUIRED);
            } else if !seen.insert(sku.clone()) {
                errors.add(format!("variants.{i}.sku"), "SKU sudah dipakai varian lain.");
            }

            let price = parse_amount(&draft.price);
            if price.is_none() {
                errors.add(format!("variants.{i}.price"), "Harga harus berupa angka.");
            }

            let stock = match parse_optional::<u32>(&draft.stock) {
                Ok(stock) => stock.unwrap_or_default(),
                Err(_) => {
                    errors.add(format!("variants.{i}.stock"), "Stok harus berupa angka.");
                    0
                }
            };

            let attributes: BTreeMap<String, String> = draft
                .attributes
                .iter()
                .filter(|(name, value)| !name.trim().is_empty() && !value.trim().is_empty())
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .collect();

            variants.push(ProductVariant {
                id: draft.id,
                sku,
                name: draft.name.trim().to_string(),
                price: price.unwrap_or_default(),
                stock,
                attributes,
            });
        }

        variants
    }

    /// Validates every step and builds the payload.
    pub fn validate(&self) -> Result<ProductPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check_basic(&mut errors);
        let variants = self.check_variants(&mut errors);

        let slug = if self.slug.trim().is_empty() {
            slugify(&self.name)
        } else {
            slugify(&self.slug)
        };

        checked(
            ProductPayload {
                name: self.name.trim().to_string(),
                slug,
                description: self.description.trim().to_string(),
                product_type: self.product_type,
                category_id: self.category_id,
                base_price: parse_amount(&self.base_price).unwrap_or_default(),
                is_active: self.is_active,
                variants,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_form() -> ProductForm {
        ProductForm {
            name: "Undangan Rustic".to_string(),
            category_id: Some(2),
            base_price: "7.500".to_string(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn next_is_gated_by_step_validation() {
        let mut form = ProductForm::default();
        assert!(!form.next());
        assert_eq!(form.step, ProductStep::Basic);
        assert!(form.errors.contains("name"));
        assert!(form.errors.contains("category_id"));

        let mut form = basic_form();
        assert!(form.next());
        assert_eq!(form.step, ProductStep::Variants);

        // Physical products need a variant.
        assert!(!form.next());
        assert!(form.errors.contains("variants"));

        form.add_variant();
        form.variants[0].sku = "rst-a5".to_string();
        assert!(form.next());
        assert_eq!(form.step, ProductStep::Review);
        assert!(!form.next());

        form.back();
        assert_eq!(form.step, ProductStep::Variants);
    }

    #[test]
    fn variants_inherit_base_price_and_validate() {
        let mut form = basic_form();
        form.add_variant();
        form.add_variant();
        form.variants[0].sku = "A5".to_string();
        form.variants[1].sku = "a5".to_string();
        form.variants[1].stock = "-3".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first("variants.1.sku"), Some("SKU sudah dipakai varian lain."));
        assert!(errors.contains("variants.1.stock"));
        assert!(!errors.contains("variants.0.price"));

        form.variants[1].sku = "A4".to_string();
        form.variants[1].stock = "40".to_string();
        form.variants[1].attributes = vec![("Ukuran".to_string(), "A4".to_string())];
        let payload = form.validate().unwrap();
        assert_eq!(payload.slug, "undangan-rustic");
        assert_eq!(payload.variants[0].price, 7_500);
        assert_eq!(payload.variants[1].attributes.get("Ukuran").map(String::as_str), Some("A4"));
    }

    #[test]
    fn digital_products_may_skip_variants() {
        let mut form = basic_form();
        form.product_type = ProductType::Digital;
        assert!(form.validate().unwrap().variants.is_empty());
    }

    #[test]
    fn server_errors_jump_to_owning_step() {
        let mut form = basic_form();
        form.step = ProductStep::Review;

        let mut server = FieldErrors::new();
        server.add("variants.0.sku", "SKU sudah terdaftar.");
        form.apply_server_errors(&server);
        assert_eq!(form.step, ProductStep::Variants);

        server.add("slug", "Slug sudah dipakai.");
        form.apply_server_errors(&server);
        assert_eq!(form.step, ProductStep::Basic);
        assert_eq!(form.errors.first("slug"), Some("Slug sudah dipakai."));
    }

    #[test]
    fn edit_round_trips_existing_product() {
        let product: Product = serde_json::from_str(
            r#"{"id":5,"name":"Souvenir Kayu","category":{"id":3,"name":"Souvenir"},"base_price":4500,
                "variants":[{"id":9,"sku":"SVK-1","price":4500,"stock":200}]}"#,
        )
        .unwrap();

        let form = ProductForm::edit(&product);
        assert_eq!(form.editing, Some(5));
        assert_eq!(form.category_id, Some(3));
        let payload = form.validate().unwrap();
        assert_eq!(payload.variants[0].id, Some(9));
        assert_eq!(payload.variants[0].stock, 200);
    }
}
