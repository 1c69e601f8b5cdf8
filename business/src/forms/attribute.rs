use serde::Serialize;

use super::{checked, require};
use crate::api::FieldErrors;
use crate::models::Attribute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributePayload {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AttributeForm {
    pub editing: Option<u64>,
    pub name: String,
    /// Comma separated, e.g. `A5, A4, DL`.
    pub values: String,
    pub errors: FieldErrors,
}

impl AttributeForm {
    pub fn edit(attribute: &Attribute) -> Self {
        Self {
            editing: Some(attribute.id),
            name: attribute.name.clone(),
            values: attribute.values_summary(),
            errors: FieldErrors::default(),
        }
    }

    pub fn validate(&self) -> Result<AttributePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);

        let mut values: Vec<String> = Vec::new();
        for value in self.values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            if values.iter().any(|v| v.eq_ignore_ascii_case(value)) {
                errors.add("values", format!("Nilai \"{value}\" ditulis lebih dari sekali."));
            } else {
                values.push(value.to_string());
            }
        }
        if values.is_empty() {
            errors.add("values", "Isi minimal satu nilai.");
        }

        checked(
            AttributePayload {
                name: self.name.trim().to_string(),
                values,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_values_and_rejects_duplicates() {
        let mut form = AttributeForm {
            name: "Ukuran".to_string(),
            values: "A5, A4 ,, DL".to_string(),
            ..AttributeForm::default()
        };
        assert_eq!(form.validate().unwrap().values, vec!["A5", "A4", "DL"]);

        form.values = "A5, a5".to_string();
        assert!(form.validate().unwrap_err().contains("values"));
    }
}
