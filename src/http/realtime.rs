//! WebSocket endpoint for board channels.
//!
//! A connection joins boards with text frames and then receives every event
//! published on them. There is no acknowledgement and no leave; closing the
//! socket ends every subscription.
//!
//! Outbound frames wait in a queue bounded by the channel capacity. When a
//! client stops reading, events that do not fit are dropped and logged.

use crate::board::{
    adapters::realtime::BoardChannels,
    domain::BoardId,
    ports::BoardEvent,
};
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::collections::HashSet;
use tokio::{
    sync::{broadcast, mpsc},
    task::JoinSet,
};
use uuid::Uuid;

/// Frame sent by a client.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ClientFrame {
    #[serde(rename = "joinBoard", rename_all = "camelCase")]
    JoinBoard { board_id: BoardId },
}

/// Extracts the board to join from a client text frame.
///
/// Accepts `{"type":"joinBoard","boardId":"…"}`, a JSON string holding the
/// id, or the bare id.
#[must_use]
pub fn parse_join_frame(text: &str) -> Option<BoardId> {
    if let Ok(ClientFrame::JoinBoard { board_id }) = serde_json::from_str(text) {
        return Some(board_id);
    }
    if let Ok(raw) = serde_json::from_str::<String>(text) {
        return BoardId::parse(raw.trim()).ok();
    }
    BoardId::parse(text.trim()).ok()
}

/// `GET /ws`
pub async fn board_socket(
    ws: WebSocketUpgrade,
    State(channels): State<BoardChannels>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_socket(socket, channels))
}

#[tracing::instrument(name = "ws.connection", skip_all, fields(connection_id = %Uuid::new_v4()))]
async fn serve_socket(socket: WebSocket, channels: BoardChannels) {
    let (mut sink, mut stream) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::channel::<String>(channels.capacity());
    let mut forwarders = JoinSet::new();
    let mut joined = HashSet::new();

    let writer = tokio::spawn(async move {
        while let Some(text) = outbound_rx.recv().await {
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => {
                let Some(board_id) = parse_join_frame(text.as_str()) else {
                    tracing::debug!("ignoring unrecognised frame");
                    continue;
                };
                if !joined.insert(board_id) {
                    continue;
                }
                match channels.subscribe(board_id) {
                    Ok(receiver) => {
                        tracing::debug!(%board_id, "joined board");
                        forwarders.spawn(forward_events(receiver, outbound_tx.clone()));
                    }
                    Err(err) => tracing::warn!(%board_id, error = %err, "join failed"),
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    forwarders.shutdown().await;
    writer.abort();
    for board_id in &joined {
        channels.release(*board_id);
    }
    tracing::debug!(boards = joined.len(), "connection closed");
}

async fn forward_events(
    mut receiver: broadcast::Receiver<BoardEvent>,
    outbound: mpsc::Sender<String>,
) {
    loop {
        match receiver.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(text) => match outbound.try_send(text) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        tracing::warn!(
                            board_id = %event.board_id(),
                            "client queue full; event dropped"
                        );
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                },
                Err(err) => tracing::warn!(error = %err, "failed to encode board event"),
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "subscriber lagged; events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
