//! Typed application state for the Vowly admin console.
//!
//! `StateCtx` owns one value per registered `State` type. Async work spawned
//! through the context never touches state directly; it publishes changes
//! through an [`Updater`], and the UI applies them once per frame with
//! [`StateCtx::sync`].

mod basic_state;
mod ctx;
mod error;
mod state;
mod task;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use error::StateError;
pub use state::{State, Updater};
pub use task::{TaskHandle, TaskId};
