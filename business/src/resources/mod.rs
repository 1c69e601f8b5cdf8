//! Per-resource list state and the commands that fill it.

mod commands;
mod state;

pub use commands::{
    create, delete, ensure_fresh, goto_page, moderate_user_content, next_page, prev_page, refresh,
    refresh_dashboard, search, set_review_approval, toggle_promo_code, update, update_order_status,
};
pub use state::{DashboardState, FetchStatus, MutationOutcome, Notice, NoticeKind, ResourceList};
