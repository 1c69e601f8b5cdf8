//! Response envelopes used by the admin API.
//!
//! List endpoints answer with a bare array, `{ data }` or `{ data, meta }`.
//! Mutations answer `{ message, data? }` on success and `{ message, errors? }`
//! on failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination metadata attached to paginated list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
        }
    }
}

impl PageMeta {
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// A fetched list, with metadata when the endpoint is paginated.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        data: Vec<T>,
        #[serde(default)]
        meta: Option<PageMeta>,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ListBody::deserialize(deserializer)? {
            ListBody::Bare(items) => Self { items, meta: None },
            ListBody::Wrapped { data, meta } => Self { items: data, meta },
        })
    }
}

/// A single record, either bare or wrapped in `{ data }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Single<T>(pub T);

#[derive(Deserialize)]
#[serde(untagged)]
enum SingleBody<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Single<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SingleBody::deserialize(deserializer)? {
            SingleBody::Wrapped { data } | SingleBody::Bare(data) => Self(data),
        })
    }
}

/// Successful mutation: `{ message, data? }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mutation<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Default for Mutation<T> {
    fn default() -> Self {
        Self {
            message: String::new(),
            data: None,
        }
    }
}

/// Validation messages keyed by field name (`name`, `variants.0.sku`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// First message for `field`, which is what forms show under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Fields whose name starts with `prefix` (e.g. every `variants.` entry).
    pub fn any_with_prefix(&self, prefix: &str) -> bool {
        self.0.keys().any(|field| field.starts_with(prefix))
    }

    pub fn merge(&mut self, other: &FieldErrors) {
        for (field, messages) in &other.0 {
            self.0
                .entry(field.clone())
                .or_default()
                .extend(messages.iter().cloned());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, OneOrMany>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(field, messages)| match messages {
                    OneOrMany::One(message) => (field, vec![message]),
                    OneOrMany::Many(messages) => (field, messages),
                })
                .collect(),
        ))
    }
}

/// Failure body: `{ message, errors? }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: FieldErrors,
}
