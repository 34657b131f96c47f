//! Route table.

use super::{
    AppState,
    handlers::{board, index, task},
    realtime::board_socket,
};
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/board", get(board::list_boards).post(board::create_board))
        .route(
            "/board/{board_id}",
            get(board::get_board)
                .put(board::update_board)
                .delete(board::delete_board),
        )
        .route("/board/{board_id}/move", put(board::move_task))
        .route("/task", get(task::list_tasks).post(task::create_task))
        .route(
            "/task/{task_id}",
            put(task::update_task).delete(task::delete_task),
        );

    Router::new()
        .route("/", get(index))
        .route("/ws", get(board_socket))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
