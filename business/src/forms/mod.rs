//! Create/edit forms. Each form keeps raw text input, validates it into the
//! payload the API expects, and holds the field errors to show under inputs.

mod attribute;
mod category;
mod invitation;
mod product;
mod promo_code;

pub use attribute::{AttributeForm, AttributePayload};
pub use category::{CategoryForm, CategoryPayload};
pub use invitation::{InvitationTemplateForm, InvitationTemplatePayload};
pub use product::{ProductForm, ProductPayload, ProductStep, VariantDraft};
pub use promo_code::{PromoCodeForm, PromoCodePayload};

use crate::api::FieldErrors;

pub(crate) const REQUIRED: &str = "Wajib diisi.";

/// `"Undangan Rustic & Kraft"` -> `"undangan-rustic-kraft"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Parses a Rupiah amount typed by a human: `150000`, `150.000`, `Rp 150.000`.
/// The `Rp` prefix is matched in any case.
pub fn parse_amount(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let digits = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("rp") => &trimmed[2..],
        _ => trimmed,
    };
    let cleaned: String = digits
        .chars()
        .filter(|ch| !matches!(ch, '.' | ' ' | '_'))
        .collect();
    cleaned.parse::<i64>().ok().filter(|amount| *amount >= 0)
}

/// Parses an optional non-negative integer. Empty input is `Ok(None)`.
pub(crate) fn parse_optional<T: std::str::FromStr>(input: &str) -> Result<Option<T>, T::Err> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        trimmed.parse::<T>().map(Some)
    }
}

pub(crate) fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

pub(crate) fn checked<P>(payload: P, errors: FieldErrors) -> Result<P, FieldErrors> {
    if errors.is_empty() { Ok(payload) } else { Err(errors) }
}
