//! Generic data table: a search box bound to one column, sortable headers,
//! and a desktop table that turns into stacked cards on narrow screens.
//!
//! The row model (filtering, sorting, the breakpoint) lives in
//! `vowly_business::table`; this module only renders it.
//! - `column`: `DataColumn`, the header and cell renderers of one column
//! - `desktop`: `egui_extras` table rendering
//! - `cards`: stacked label/value cards

mod cards;
mod column;
mod desktop;

use egui::{Id, Ui};
use egui_extras::Column as Width;
use vowly_business::table::{
    CaseSensitivity, Column, ResponsiveLayout, RowRecord, TableState, ViewMode, visible_rows,
};

pub use column::{DataColumn, HeaderCtx, default_header};

use column::{CellFn, HeaderFn};

/// Default empty state message.
pub const EMPTY_TEXT: &str = "Tidak ada data";

/// Row height for desktop rows.
pub const ROW_HEIGHT: f32 = 32.0;
/// Header height for desktop tables.
pub const HEADER_HEIGHT: f32 = 28.0;

/// Action emitted by a cell, tagged with the index of its row in the slice
/// passed to [`DataTable::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction<A> {
    pub index: usize,
    pub action: A,
}

struct Renderer<R, A> {
    header: HeaderFn,
    cell: CellFn<R, A>,
    width: Width,
}

/// Borrowed pieces of a `DataTable` handed to the desktop and card renderers.
struct View<'a, R, A> {
    id: Id,
    descriptors: &'a [Column<R>],
    renderers: &'a [Renderer<R, A>],
    state: &'a mut TableState,
    empty_text: &'a str,
}

/// A table instance. Owns its sort, filter and layout state; create it once
/// per page and keep it for as long as that state should survive.
pub struct DataTable<R, A = ()> {
    id: Id,
    descriptors: Vec<Column<R>>,
    renderers: Vec<Renderer<R, A>>,
    state: TableState,
    layout: ResponsiveLayout,
    search_placeholder: String,
    empty_text: String,
}

impl<R: RowRecord, A> DataTable<R, A> {
    /// `search_column` is the key the search box filters on.
    pub fn new(id_salt: impl std::hash::Hash, search_column: &str) -> Self {
        Self {
            id: Id::new(id_salt),
            descriptors: Vec::new(),
            renderers: Vec::new(),
            state: TableState::new(search_column).with_case(CaseSensitivity::Insensitive),
            layout: ResponsiveLayout::default(),
            search_placeholder: "Cari...".to_string(),
            empty_text: EMPTY_TEXT.to_string(),
        }
    }

    pub fn column(mut self, column: DataColumn<R, A>) -> Self {
        debug_assert!(
            self.descriptors
                .iter()
                .all(|existing| existing.key() != column.descriptor.key()),
            "duplicate column key `{}`",
            column.descriptor.key()
        );
        let DataColumn {
            descriptor,
            header,
            cell,
            width,
        } = column;
        self.descriptors.push(descriptor);
        self.renderers.push(Renderer {
            header,
            cell,
            width,
        });
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn case(mut self, case: CaseSensitivity) -> Self {
        self.state = self.state.with_case(case);
        self
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.layout.mode()
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.descriptors
    }

    /// Indices of the rows currently shown, in display order.
    pub fn visible(&self, rows: &[R]) -> Vec<usize> {
        visible_rows(rows, &self.descriptors, &self.state)
    }

    /// Renders the search box and the rows, returning the first action a
    /// cell emitted this frame.
    pub fn show(&mut self, ui: &mut Ui, rows: &[R]) -> Option<RowAction<A>> {
        let mode = self.layout.observe(ui.ctx().content_rect().width());

        self.search_bar(ui);
        ui.add_space(6.0);

        let visible = self.visible(rows);
        let view = View {
            id: self.id,
            descriptors: &self.descriptors,
            renderers: &self.renderers,
            state: &mut self.state,
            empty_text: &self.empty_text,
        };

        match mode {
            ViewMode::Table => desktop::show(ui, view, rows, &visible),
            ViewMode::Cards => cards::show(ui, view, rows, &visible),
        }
    }

    fn search_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(self.state.filter.value_mut())
                    .hint_text(self.search_placeholder.as_str())
                    .id_salt(self.id.with("search"))
                    .desired_width(260.0),
            );
            if self.state.filter.is_active() && ui.button("✖ Hapus").clicked() {
                self.state.filter.clear();
            }
        });
    }
}

/// Shows `text` centered across the available width.
fn empty_state(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.weak(text);
    });
    ui.add_space(12.0);
}
