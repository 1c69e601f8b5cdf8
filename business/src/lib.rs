//! Domain layer of the Vowly admin console: configuration, the admin REST
//! client, domain models, the data-table row model, forms and dashboard
//! figures.
//!
//! UI code stays thin: it reads state from `StateCtx`, renders it and calls
//! the commands in [`resources`].

pub mod api;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod http;
pub mod models;
pub mod resources;
pub mod table;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use api::{AdminResource, ApiError, ApiResult, FieldErrors, ListQuery, PageMeta};
pub use config::{BusinessConfig, ConfigError};
pub use resources::{DashboardState, FetchStatus, MutationOutcome, Notice, NoticeKind, ResourceList};
