//! Row model behind the generic data table: column descriptors, sort and
//! filter state, the responsive breakpoint and client-side paging.

mod column;
mod layout;
mod pagination;
mod row_model;
mod value;

pub use column::{Column, RowRecord, humanize_key};
pub use layout::{NARROW_BREAKPOINT, ResponsiveLayout, ViewMode};
pub use pagination::Paginator;
pub use row_model::{
    CaseSensitivity, FilterState, SortDirection, SortState, TableState, UNSORTED_INDICATOR,
    visible_rows,
};
pub use value::CellValue;
