//! Process-wide registry of board broadcast channels.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::board::{
    domain::BoardId,
    ports::{BoardEvent, BoardEventPublisher, BroadcastError},
};

/// Default per-board channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Publish/subscribe channels keyed by board identifier.
///
/// Channels are created on first subscription. A channel is dropped once its
/// last receiver is gone (on [`release`](Self::release) or on a publish that
/// reaches nobody) or when its board is [`close`](Self::close)d.
#[derive(Debug, Clone)]
pub struct BoardChannels {
    capacity: usize,
    channels: Arc<RwLock<HashMap<BoardId, broadcast::Sender<BoardEvent>>>>,
}

impl BoardChannels {
    /// Creates a registry whose channels buffer up to `capacity` events per
    /// slow subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            channels: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Joins the channel of `board_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BroadcastError::RegistryUnavailable`] when the registry lock
    /// is poisoned.
    pub fn subscribe(
        &self,
        board_id: BoardId,
    ) -> Result<broadcast::Receiver<BoardEvent>, BroadcastError> {
        let mut channels = self
            .channels
            .write()
            .map_err(|err| BroadcastError::RegistryUnavailable(err.to_string()))?;
        let sender = channels
            .entry(board_id)
            .or_insert_with(|| broadcast::channel(self.capacity).0);
        Ok(sender.subscribe())
    }

    /// Drops the channel of `board_id` when no receiver is left on it.
    ///
    /// Callers invoke this after dropping their receivers.
    pub fn release(&self, board_id: BoardId) {
        let Ok(mut channels) = self.channels.write() else {
            return;
        };
        let idle = channels
            .get(&board_id)
            .is_some_and(|sender| sender.receiver_count() == 0);
        if idle {
            channels.remove(&board_id);
            tracing::debug!(%board_id, "idle board channel dropped");
        }
    }

    /// Drops the channel of `board_id` regardless of subscribers.
    ///
    /// Live receivers observe the channel as closed.
    pub fn close(&self, board_id: BoardId) {
        let removed = self
            .channels
            .write()
            .map(|mut channels| channels.remove(&board_id).is_some())
            .unwrap_or_default();
        if removed {
            tracing::debug!(%board_id, "board channel closed");
        }
    }

    /// Returns the number of live subscribers on the channel of `board_id`.
    #[must_use]
    pub fn subscriber_count(&self, board_id: BoardId) -> usize {
        self.channels
            .read()
            .ok()
            .and_then(|channels| channels.get(&board_id).map(broadcast::Sender::receiver_count))
            .unwrap_or_default()
    }

    /// Returns the number of boards with an open channel.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels
            .read()
            .map(|channels| channels.len())
            .unwrap_or_default()
    }

    /// Returns the per-subscriber buffer size.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoardChannels {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[async_trait]
impl BoardEventPublisher for BoardChannels {
    async fn publish(&self, event: BoardEvent) -> Result<usize, BroadcastError> {
        let board_id = event.board_id();
        let sent = {
            let channels = self
                .channels
                .read()
                .map_err(|err| BroadcastError::RegistryUnavailable(err.to_string()))?;
            let Some(sender) = channels.get(&board_id) else {
                return Ok(0);
            };
            sender.send(event)
        };
        // A send error only means every receiver has gone away.
        match sent {
            Ok(delivered) => Ok(delivered),
            Err(_) => {
                self.release(board_id);
                Ok(0)
            }
        }
    }
}
