//! Rendering half of a data table column.
//!
//! The descriptor (`vowly_business::table::Column`) decides what a column
//! sorts and filters on. `DataColumn` adds how its header and cells look.

use egui::{RichText, Ui};
use egui_extras::Column as Width;
use ustr::Ustr;
use vowly_business::table::{Column, RowRecord, SortDirection, UNSORTED_INDICATOR};

pub(super) type CellFn<R, A> = Box<dyn Fn(&mut Ui, &R) -> Option<A>>;
pub(super) type HeaderFn = Box<dyn Fn(&mut Ui, &mut HeaderCtx)>;

/// What a custom header renderer sees of the sort state.
#[derive(Debug)]
pub struct HeaderCtx {
    key: Ustr,
    text: String,
    sortable: bool,
    direction: Option<SortDirection>,
    toggled: bool,
}

impl HeaderCtx {
    pub(super) fn new<R>(column: &Column<R>, direction: Option<SortDirection>) -> Self {
        Self {
            key: column.key(),
            text: column.header_text().unwrap_or_default().to_string(),
            sortable: column.is_sortable(),
            direction,
            toggled: false,
        }
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    /// Plain header text, empty when the column has none.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// `▲`, `▼`, or `⬍` when the column is sortable but not sorted.
    pub fn indicator(&self) -> &'static str {
        self.direction
            .map(SortDirection::indicator)
            .unwrap_or(UNSORTED_INDICATOR)
    }

    /// Requests one step of the sort cycle for this column.
    pub fn toggle_sort(&mut self) {
        if self.sortable {
            self.toggled = true;
        }
    }

    pub(super) fn was_toggled(&self) -> bool {
        self.toggled
    }
}

/// Default header: a button with the sort indicator for sortable columns,
/// bold text otherwise.
pub fn default_header(ui: &mut Ui, header: &mut HeaderCtx) {
    if header.is_sortable() {
        let label = format!("{} {}", header.text(), header.indicator());
        if ui.button(RichText::new(label).strong()).clicked() {
            header.toggle_sort();
        }
    } else {
        ui.strong(header.text());
    }
}

/// A column descriptor plus its header and cell renderers.
///
/// `A` is the row action a cell can emit, e.g. "edit" from a button.
pub struct DataColumn<R, A = ()> {
    pub(super) descriptor: Column<R>,
    pub(super) header: HeaderFn,
    pub(super) cell: CellFn<R, A>,
    pub(super) width: Width,
}

impl<R: RowRecord + 'static, A> DataColumn<R, A> {
    /// Column whose cells show the descriptor's value as text.
    pub fn new(descriptor: Column<R>) -> Self {
        let value_of = descriptor.clone();
        Self {
            descriptor,
            header: Box::new(default_header),
            cell: Box::new(move |ui, row| {
                let text = value_of
                    .value(row)
                    .map(|value| value.to_string())
                    .unwrap_or_default();
                ui.label(text);
                None
            }),
            width: Width::auto().at_least(60.0),
        }
    }
}

impl<R, A> DataColumn<R, A> {
    /// Column rendered entirely by `cell`.
    pub fn with_cell(
        descriptor: Column<R>,
        cell: impl Fn(&mut Ui, &R) -> Option<A> + 'static,
    ) -> Self {
        Self {
            descriptor,
            header: Box::new(default_header),
            cell: Box::new(cell),
            width: Width::auto().at_least(60.0),
        }
    }

    pub fn cell(mut self, cell: impl Fn(&mut Ui, &R) -> Option<A> + 'static) -> Self {
        self.cell = Box::new(cell);
        self
    }

    pub fn header_ui(mut self, header: impl Fn(&mut Ui, &mut HeaderCtx) + 'static) -> Self {
        self.header = Box::new(header);
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }
}
