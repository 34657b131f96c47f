//! In-memory integration tests for board and task lifecycles.

use super::helpers::{Harness, harness, ids_in, task_id_at};
use rstest::rstest;
use taskboard::board::{
    domain::{ListTitle, UserId},
    services::{BoardServiceErrorKind, CreateBoardRequest, CreateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_appear_in_board_order(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["A", "B", "C"]).await?;

    let expected = vec![
        task_id_at(&tasks, 0)?,
        task_id_at(&tasks, 1)?,
        task_id_at(&tasks, 2)?,
    ];
    eyre::ensure!(ids_in(&board, ListTitle::Inbox) == expected, "inbox order mismatch");
    eyre::ensure!(board.task_count() == 3, "board should hold three tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shared_board_is_listed_for_its_members(harness: Harness) -> Result<(), eyre::Report> {
    let (owner, member, outsider) = (UserId::new(), UserId::new(), UserId::new());
    let shared = harness
        .boards
        .create_board(CreateBoardRequest::new(owner, "Shared").with_members([member]))
        .await?;

    let for_member = harness.boards.list_boards_for_user(member).await?;
    let for_outsider = harness.boards.list_boards_for_user(outsider).await?;

    eyre::ensure!(
        for_member.iter().map(|board| board.id).collect::<Vec<_>>() == vec![shared.id],
        "member should see the shared board"
    );
    eyre::ensure!(for_outsider.is_empty(), "outsider should see nothing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_removes_it_from_the_board(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, tasks) = harness.board_with_inbox(owner, &["Keep", "Drop"]).await?;
    let (keep, dropped) = (task_id_at(&tasks, 0)?, task_id_at(&tasks, 1)?);

    harness.tasks.delete_task(dropped).await?;

    let view = harness.boards.get_board(board.id).await?;
    eyre::ensure!(ids_in(&view, ListTitle::Inbox) == vec![keep], "only Keep should remain");
    let remaining = harness.tasks.list_tasks_for_user(owner).await?;
    eyre::ensure!(remaining.len() == 1, "one task should remain");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_cannot_be_created_on_a_deleted_board(harness: Harness) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let (board, _) = harness.board_with_inbox(owner, &[]).await?;
    harness.boards.delete_board(board.id).await?;

    let result = harness
        .tasks
        .create_task(CreateTaskRequest::new(owner, board.id, "Late", "Too late"))
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("creation should fail"))?;
    eyre::ensure!(err.kind() == BoardServiceErrorKind::NotFound, "expected not found");
    Ok(())
}
