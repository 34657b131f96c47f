//! In-memory integration tests for moving tasks and broadcasting boards.

use super::helpers::{Harness, harness, ids_in, task_id_at};
use rstest::rstest;
use taskboard::board::{
    domain::{BoardMirror, ListTitle, UserId},
    ports::BoardEvent,
    services::{BoardServiceErrorKind, MoveTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_is_broadcast_to_joined_subscribers(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["T1", "T2"]).await?;
    let (t1, t2) = (task_id_at(&tasks, 0)?, task_id_at(&tasks, 1)?);
    let mut subscriber = harness.channels.subscribe(board.id)?;

    let view = harness
        .moves
        .move_and_broadcast(MoveTaskRequest::new(board.id, t1, "inbox", "todo", 0))
        .await?;

    eyre::ensure!(ids_in(&view, ListTitle::Inbox) == vec![t2], "inbox should hold T2");
    eyre::ensure!(ids_in(&view, ListTitle::Todo) == vec![t1], "todo should hold T1");
    let BoardEvent::TaskMoved { board_id, board: pushed } = subscriber.recv().await?;
    eyre::ensure!(board_id == board.id, "event should name the moved board");
    eyre::ensure!(pushed == view, "event should carry the returned board");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mirror_follows_broadcasts_and_skips_repeats(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["T1", "T2"]).await?;
    let t2 = task_id_at(&tasks, 1)?;
    let mut subscriber = harness.channels.subscribe(board.id)?;
    let mut mirror = BoardMirror::new();
    mirror.apply(&board);

    for _ in 0..2 {
        harness
            .moves
            .move_and_broadcast(MoveTaskRequest::new(board.id, t2, "inbox", "completed", 0))
            .await?;
    }

    let BoardEvent::TaskMoved { board: first, .. } = subscriber.recv().await?;
    let BoardEvent::TaskMoved { board: second, .. } = subscriber.recv().await?;
    eyre::ensure!(mirror.apply(&first), "first broadcast changes the mirror");
    eyre::ensure!(!mirror.apply(&second), "identical broadcast is a no-op");
    let completed = mirror.tasks_with_status(board.id, ListTitle::Completed);
    eyre::ensure!(
        completed.iter().map(|task| task.id).collect::<Vec<_>>() == vec![t2],
        "mirror should show T2 as completed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_destination_is_rejected_and_not_broadcast(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["T1"]).await?;
    let t1 = task_id_at(&tasks, 0)?;
    let mut subscriber = harness.channels.subscribe(board.id)?;

    let result = harness
        .moves
        .move_and_broadcast(MoveTaskRequest::new(board.id, t1, "inbox", "archived", 0))
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("move should fail"))?;
    eyre::ensure!(err.kind() == BoardServiceErrorKind::Validation, "expected validation error");
    eyre::ensure!(subscriber.try_recv().is_err(), "nothing should be broadcast");
    let unchanged = harness.boards.get_board(board.id).await?;
    eyre::ensure!(ids_in(&unchanged, ListTitle::Inbox) == vec![t1], "inbox should keep T1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_can_no_longer_be_moved(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["T1", "T2"]).await?;
    let (t1, t2) = (task_id_at(&tasks, 0)?, task_id_at(&tasks, 1)?);
    harness
        .moves
        .move_and_broadcast(MoveTaskRequest::new(board.id, t1, "inbox", "todo", 0))
        .await?;

    harness.tasks.delete_task(t1).await?;
    let result = harness
        .moves
        .move_and_broadcast(MoveTaskRequest::new(board.id, t1, "todo", "completed", 0))
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("move should fail"))?;
    eyre::ensure!(err.kind() == BoardServiceErrorKind::NotFound, "expected not found");
    let view = harness.boards.get_board(board.id).await?;
    eyre::ensure!(ids_in(&view, ListTitle::Todo).is_empty(), "todo should be empty");
    eyre::ensure!(ids_in(&view, ListTitle::Inbox) == vec![t2], "inbox should hold T2");
    Ok(())
}
