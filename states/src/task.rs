//! Handles for tasks spawned through [`crate::StateCtx::spawn`].
//!
//! Every task is keyed by a `TypeId` (usually the state it writes to) and a
//! generation counter. Spawning a new task under the same key cancels the
//! previous one, so a slow list request can never overwrite the result of a
//! newer one.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    key: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(key: TypeId, generation: u64) -> Self {
        Self { key, generation }
    }

    pub fn key(&self) -> TypeId {
        self.key
    }

    /// Higher generations were spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A spawned task together with its cancellation token.
///
/// Cancellation is cooperative: the context races the task future against
/// [`CancellationToken::cancelled`] and drops the future when the token fires.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_differ_by_generation() {
        let key = TypeId::of::<String>();
        let first = TaskId::new(key, 1);
        let second = TaskId::new(key, 2);

        assert_eq!(first.key(), second.key());
        assert_ne!(first, second);
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn cloned_handles_share_cancellation() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<u8>(), 1),
            CancellationToken::new(),
        );
        let clone = handle.clone();
        let token = handle.cancellation_token();

        clone.cancel();

        assert!(handle.is_cancelled());
        assert!(token.is_cancelled());
    }
}
