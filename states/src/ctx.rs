use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, trace};
use tokio_util::sync::CancellationToken;

use crate::state::{Update, Waker};
use crate::{State, StateError, TaskHandle, TaskId, Updater};

/// Owner of every registered [`State`] plus the queue async tasks write into.
pub struct StateCtx {
    states: HashMap<TypeId, Box<dyn Any>>,
    send: Sender<Update>,
    recv: Receiver<Update>,
    tasks: HashMap<TypeId, TaskHandle>,
    /// Parent of every detached task, cancelled by `cancel_all`.
    detached: CancellationToken,
    generation: u64,
    waker: Option<Waker>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("pending_updates", &self.recv.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: HashMap::new(),
            send,
            recv,
            tasks: HashMap::new(),
            detached: CancellationToken::new(),
            generation: 0,
            waker: None,
        }
    }

    /// Registers (or replaces) a state value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn cached<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.downcast_ref::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.cached::<T>()
            .ok_or_else(StateError::not_registered::<T>)
    }

    /// Mutable access, registering `T::default()` on first use.
    pub fn state_mut<T: State + Default>(&mut self) -> &mut T {
        let entry = self
            .states
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(T::default()));

        match entry.downcast_mut::<T>() {
            Some(state) => state,
            None => unreachable!("state stored under the TypeId of another type"),
        }
    }

    pub fn update<T: State + Default>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Installs a callback fired whenever an [`Updater`] queues a change.
    ///
    /// The UI uses this to request a repaint so queued results show up
    /// without waiting for input events.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.waker.clone())
    }

    /// Applies every queued update in the order it was sent.
    ///
    /// Returns the number of updates applied. Updates addressed to states
    /// that were never registered are dropped.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(update) = self.recv.try_recv() {
            match self.states.get_mut(&update.target) {
                Some(state) => {
                    (update.apply)(state.as_mut());
                    applied += 1;
                }
                None => debug!("Dropping update for unregistered state {:?}", update.target),
            }
        }

        applied
    }

    /// Spawns `future` keyed by the type `K`, cancelling any task previously
    /// spawned under the same key.
    pub fn spawn<K: 'static, F>(&mut self, future: F) -> TaskHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.spawn_keyed(TypeId::of::<K>(), future)
    }

    pub fn spawn_keyed<F>(&mut self, key: TypeId, future: F) -> TaskHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.generation += 1;
        let handle = TaskHandle::new(TaskId::new(key, self.generation), CancellationToken::new());

        if let Some(previous) = self.tasks.insert(key, handle.clone())
            && !previous.is_cancelled()
        {
            trace!(
                "Cancelling task generation {} superseded by {}",
                previous.id().generation(),
                self.generation
            );
            previous.cancel();
        }

        run_until_cancelled(handle.cancellation_token(), future);
        handle
    }

    /// Spawns `future` without a key. Detached tasks never cancel each other;
    /// only [`StateCtx::cancel_all`] stops them.
    pub fn spawn_detached<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        run_until_cancelled(self.detached.child_token(), future);
    }

    /// Cancels the task currently registered under `K`, if any.
    pub fn cancel<K: 'static>(&mut self) {
        if let Some(handle) = self.tasks.remove(&TypeId::of::<K>()) {
            handle.cancel();
        }
    }

    /// Cancels every outstanding task. Called when the app shuts down.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.cancel();
        }
        self.detached.cancel();
        self.detached = CancellationToken::new();
    }
}

fn run_until_cancelled<F>(token: CancellationToken, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let task = async move {
        tokio::select! {
            () = token.cancelled() => {}
            () = future => {}
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::spawn(task);
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(task);
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
