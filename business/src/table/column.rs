use std::fmt;
use std::sync::Arc;

use ustr::Ustr;

use super::value::CellValue;

/// Exposes a record's fields to the row model by property key.
///
/// Unknown keys return [`CellValue::Empty`].
pub trait RowRecord {
    fn field(&self, key: &str) -> CellValue;
}

type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

enum Source<R> {
    /// Direct property lookup through [`RowRecord::field`] using the column key.
    Field,
    Computed(Accessor<R>),
    /// Action or decoration column, no value to filter or sort on.
    None,
}

impl<R> Clone for Source<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Field => Self::Field,
            Self::Computed(accessor) => Self::Computed(Arc::clone(accessor)),
            Self::None => Self::None,
        }
    }
}

/// Declarative description of one table column.
///
/// Rendering lives in the UI crate; this type carries what the row model and
/// the card layout need: identity, value source, header text and label.
pub struct Column<R> {
    key: Ustr,
    source: Source<R>,
    header: Option<String>,
    label: Option<String>,
    sortable: bool,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            source: self.source.clone(),
            header: self.header.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Field => "field",
            Source::Computed(_) => "computed",
            Source::None => "none",
        };
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("source", &source)
            .field("header", &self.header)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<R> Column<R> {
    /// A column reading `key` straight from the record.
    pub fn field(key: &str) -> Self {
        Self::with_source(key, Source::Field, true)
    }

    /// A column whose value is computed from the whole row.
    pub fn computed(key: &str, accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static) -> Self {
        Self::with_source(key, Source::Computed(Arc::new(accessor)), true)
    }

    /// A column that only renders (row actions, badges).
    pub fn display(key: &str) -> Self {
        Self::with_source(key, Source::None, false)
    }

    fn with_source(key: &str, source: Source<R>, sortable: bool) -> Self {
        Self {
            key: Ustr::from(key),
            source,
            header: None,
            label: None,
            sortable,
        }
    }

    /// Plain-text header.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Label shown next to the value in card layout.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Columns without a value source are never sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn is_filterable(&self) -> bool {
        !matches!(self.source, Source::None)
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable && self.is_filterable()
    }

    /// Label used in card layout: explicit label, then header text, then the
    /// humanized key, then `"Column"`.
    pub fn card_label(&self) -> String {
        self.label
            .as_deref()
            .or(self.header.as_deref())
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .or_else(|| humanize_key(&self.key))
            .unwrap_or_else(|| "Column".to_string())
    }
}

impl<R: RowRecord> Column<R> {
    /// The value used for filtering and sorting, `None` for display columns.
    pub fn value(&self, row: &R) -> Option<CellValue> {
        match &self.source {
            Source::Field => Some(row.field(&self.key)),
            Source::Computed(accessor) => Some(accessor(row)),
            Source::None => None,
        }
    }
}

/// `order_status` -> `Order Status`, `customer.full-name` -> `Customer Full Name`.
pub fn humanize_key(key: &str) -> Option<String> {
    let words: Vec<String> = key
        .split(['-', '_', '.'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
