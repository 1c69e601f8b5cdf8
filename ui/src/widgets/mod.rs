pub mod data_table;
mod form;
mod notice;
mod pager;
mod toolbar;

pub use data_table::{DataColumn, DataTable, HeaderCtx, RowAction};
pub use form::{confirm_dialog, field_error, form_window, labeled_text, money_field};
pub use notice::{fetch_error, notice_banner};
pub use pager::{PageRequest, local_pager, server_pager};
pub use toolbar::{Toolbar, page_toolbar};
