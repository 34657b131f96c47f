//! Per-board serialisation of read-modify-write sequences.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OwnedMutexGuard;

use crate::board::domain::BoardId;

/// Keyed async mutex serialising board document updates within one process.
///
/// Holders keep the guard across load, mutate and save so two moves on the
/// same board cannot interleave their writes. Boards are independent of each
/// other. Writers in other processes are not covered; across processes the
/// store remains last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct BoardGate {
    locks: Arc<Mutex<HashMap<BoardId, Arc<tokio::sync::Mutex<()>>>>>,
}

impl BoardGate {
    /// Creates a gate with no boards locked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `board_id`.
    pub async fn acquire(&self, board_id: BoardId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(board_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Drops the lock entry of a deleted board once nobody holds it.
    pub fn forget(&self, board_id: BoardId) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&board_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&board_id);
        }
    }
}
