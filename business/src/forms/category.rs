use serde::Serialize;

use super::{checked, require, slugify};
use crate::api::FieldErrors;
use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    /// Id of the record being edited, `None` when creating.
    pub editing: Option<u64>,
    pub name: String,
    /// Left blank to derive it from the name.
    pub slug: String,
    pub description: String,
    pub parent_id: Option<u64>,
    pub errors: FieldErrors,
}

impl CategoryForm {
    pub fn edit(category: &Category) -> Self {
        Self {
            editing: Some(category.id),
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone().unwrap_or_default(),
            parent_id: category.parent_id,
            errors: FieldErrors::default(),
        }
    }

    pub fn validate(&self) -> Result<CategoryPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);

        let slug = if self.slug.trim().is_empty() {
            slugify(&self.name)
        } else {
            slugify(&self.slug)
        };
        if slug.is_empty() && !self.name.trim().is_empty() {
            errors.add("slug", "Slug harus berisi huruf atau angka.");
        }
        if self.editing.is_some() && self.editing == self.parent_id {
            errors.add("parent_id", "Kategori tidak boleh menjadi induk dirinya sendiri.");
        }

        let description = self.description.trim();
        checked(
            CategoryPayload {
                name: self.name.trim().to_string(),
                slug,
                description: (!description.is_empty()).then(|| description.to_string()),
                parent_id: self.parent_id,
            },
            errors,
        )
    }
}
