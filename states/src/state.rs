use std::any::{Any, TypeId};
use std::sync::Arc;

use flume::Sender;
use log::warn;

/// Marker for values stored in a [`crate::StateCtx`].
pub trait State: Any {}

pub(crate) type Waker = Arc<dyn Fn() + Send + Sync>;

/// A queued mutation for the state registered under `target`.
pub(crate) struct Update {
    pub(crate) target: TypeId,
    pub(crate) apply: Box<dyn FnOnce(&mut dyn Any) + Send>,
}

/// Send-safe handle used by async tasks to publish state changes.
///
/// Updates are queued and only applied when the owning context runs
/// [`crate::StateCtx::sync`], so a task never observes a half-rendered frame.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    waker: Option<Waker>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, waker: Option<Waker>) -> Self {
        Self { send, waker }
    }

    /// Replaces the whole state value.
    pub fn set<T: State + Send>(&self, value: T) {
        self.update::<T>(move |state| *state = value);
    }

    /// Mutates the state in place on the next sync.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let apply = Box::new(move |any: &mut dyn Any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        });

        let update = Update {
            target: TypeId::of::<T>(),
            apply,
        };

        if self.send.send(update).is_err() {
            warn!(
                "State context dropped, discarding update for {}",
                std::any::type_name::<T>()
            );
            return;
        }

        if let Some(waker) = &self.waker {
            waker();
        }
    }
}
