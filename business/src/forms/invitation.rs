use serde::Serialize;

use super::{checked, parse_amount, require, slugify};
use crate::api::FieldErrors;
use crate::models::InvitationTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationTemplatePayload {
    pub name: String,
    pub slug: String,
    pub theme: String,
    pub price: i64,
    pub is_premium: bool,
    pub is_active: bool,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InvitationTemplateForm {
    pub editing: Option<u64>,
    pub name: String,
    pub slug: String,
    pub theme: String,
    pub price: String,
    pub is_premium: bool,
    pub is_active: bool,
    pub preview_url: String,
    pub errors: FieldErrors,
}

impl Default for InvitationTemplateForm {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            slug: String::new(),
            theme: String::new(),
            price: "0".to_string(),
            is_premium: false,
            is_active: true,
            preview_url: String::new(),
            errors: FieldErrors::default(),
        }
    }
}

impl InvitationTemplateForm {
    pub fn edit(template: &InvitationTemplate) -> Self {
        Self {
            editing: Some(template.id),
            name: template.name.clone(),
            slug: template.slug.clone(),
            theme: template.theme.clone(),
            price: template.price.to_string(),
            is_premium: template.is_premium,
            is_active: template.is_active,
            preview_url: template.preview_url.clone().unwrap_or_default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn validate(&self) -> Result<InvitationTemplatePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "theme", &self.theme);

        let price = parse_amount(&self.price);
        match price {
            None => errors.add("price", "Harga harus berupa angka."),
            Some(0) if self.is_premium => errors.add("price", "Template premium harus berbayar."),
            Some(_) => {}
        }

        let preview_url = self.preview_url.trim();
        if !preview_url.is_empty()
            && !(preview_url.starts_with("https://") || preview_url.starts_with("http://"))
        {
            errors.add("preview_url", "URL pratinjau harus diawali http:// atau https://.");
        }

        let slug = if self.slug.trim().is_empty() {
            slugify(&self.name)
        } else {
            slugify(&self.slug)
        };

        checked(
            InvitationTemplatePayload {
                name: self.name.trim().to_string(),
                slug,
                theme: self.theme.trim().to_string(),
                price: price.unwrap_or_default(),
                is_premium: self.is_premium,
                is_active: self.is_active,
                preview_url: (!preview_url.is_empty()).then(|| preview_url.to_string()),
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> InvitationTemplateForm {
        InvitationTemplateForm {
            name: "Javanese Gold".to_string(),
            theme: "tradisional".to_string(),
            price: "Rp 99.000".to_string(),
            ..InvitationTemplateForm::default()
        }
    }

    #[test]
    fn valid_template() {
        let payload = form().validate().unwrap();
        assert_eq!(payload.slug, "javanese-gold");
        assert_eq!(payload.price, 99_000);
        assert!(payload.is_active);
    }

    #[test]
    fn premium_must_be_paid_and_url_checked() {
        let mut form = form();
        form.price = "0".to_string();
        form.is_premium = true;
        form.preview_url = "ftp://preview".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first("price"), Some("Template premium harus berbayar."));
        assert!(errors.contains("preview_url"));
    }
}
