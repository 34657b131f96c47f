//! Service tests for task creation, listing, and deletion.

use super::support::{Seeded, board_with_lists, ids_in, task_with};
use crate::board::{
    adapters::memory::{InMemoryBoardRepository, InMemoryTaskRepository},
    domain::{BoardId, ListTitle, TaskId, UserId},
    ports::{BoardRepository, TaskRepository},
    services::{
        BoardMutationService, BoardServiceError, BoardServiceErrorKind, CreateTaskRequest,
        MoveTaskRequest, TaskService, UpdateTaskRequest,
    },
};
use rstest::rstest;
use std::sync::Arc;

type TestService = TaskService<InMemoryBoardRepository, InMemoryTaskRepository>;

async fn empty_board() -> (Seeded, TestService) {
    let board = board_with_lists(UserId::new(), &[], &[], &[]);
    let seeded = Seeded::new(&board, &[]).await;
    let service = TaskService::new(Arc::clone(&seeded.boards), Arc::clone(&seeded.tasks));
    (seeded, service)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_appended_to_their_status_list() {
    let (seeded, service) = empty_board().await;

    let first = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "One", "First"))
        .await
        .expect("create");
    let second = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "Two", "Second"))
        .await
        .expect("create");
    let done = service
        .create_task(
            CreateTaskRequest::new(seeded.user, seeded.board_id, "Three", "Third")
                .with_status(ListTitle::Completed),
        )
        .await
        .expect("create");

    let board = seeded.board().await;
    assert_eq!(first.status(), ListTitle::Inbox);
    assert_eq!(first.board_id(), Some(seeded.board_id));
    assert_eq!(
        ids_in(&board, ListTitle::Inbox),
        vec![first.id(), second.id()]
    );
    assert_eq!(ids_in(&board, ListTitle::Completed), vec![done.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creating_on_a_missing_board_is_not_found() {
    let (seeded, service) = empty_board().await;
    let missing = BoardId::new();

    let err = service
        .create_task(CreateTaskRequest::new(seeded.user, missing, "Lost", "Nowhere"))
        .await
        .expect_err("board does not exist");

    assert!(matches!(err, BoardServiceError::BoardNotFound(id) if id == missing));
    let stored = seeded
        .tasks
        .list_by_user(seeded.user)
        .await
        .expect("listing should succeed");
    assert!(stored.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_description_is_a_validation_error() {
    let (seeded, service) = empty_board().await;

    let err = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "Title", " "))
        .await
        .expect_err("blank description");

    assert_eq!(err.kind(), BoardServiceErrorKind::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_listed_per_owner() {
    let (seeded, service) = empty_board().await;
    let stranger = UserId::new();
    let mine = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "Mine", "Mine"))
        .await
        .expect("create");
    service
        .create_task(CreateTaskRequest::new(stranger, seeded.board_id, "Theirs", "Theirs"))
        .await
        .expect("create");

    let listed = service
        .list_tasks_for_user(seeded.user)
        .await
        .expect("listing should succeed");

    assert_eq!(listed, vec![mine]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_reference_even_with_a_stale_status() {
    let user = UserId::new();
    let (kept, deleted) = (TaskId::new(), TaskId::new());
    let board = board_with_lists(user, &[kept], &[], &[deleted]);
    let tasks = [
        task_with(kept, user, ListTitle::Inbox, Some(board.id())),
        task_with(deleted, user, ListTitle::Inbox, Some(board.id())),
    ];
    let seeded = Seeded::new(&board, &tasks).await;
    let service: TestService =
        TaskService::new(Arc::clone(&seeded.boards), Arc::clone(&seeded.tasks));

    service.delete_task(deleted).await.expect("delete should succeed");

    let stored = seeded.board().await;
    assert_eq!(stored.task_ids(), vec![kept]);
    assert_eq!(
        seeded.tasks.find_by_id(deleted).await.expect("lookup"),
        None
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_when_the_board_is_gone() {
    let user = UserId::new();
    let task_id = TaskId::new();
    let board = board_with_lists(user, &[task_id], &[], &[]);
    let task = task_with(task_id, user, ListTitle::Inbox, Some(board.id()));
    let seeded = Seeded::new(&board, &[task]).await;
    seeded
        .boards
        .delete(seeded.board_id)
        .await
        .expect("board delete");
    let service: TestService =
        TaskService::new(Arc::clone(&seeded.boards), Arc::clone(&seeded.tasks));

    service.delete_task(task_id).await.expect("delete should succeed");

    assert_eq!(seeded.tasks.find_by_id(task_id).await.expect("lookup"), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_task_is_not_found() {
    let (_, service) = empty_board().await;
    let missing = TaskId::new();

    let err = service
        .delete_task(missing)
        .await
        .expect_err("task does not exist");

    assert!(matches!(err, BoardServiceError::TaskNotFound(id) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_edits_text_but_keeps_placement() {
    let (seeded, service) = empty_board().await;
    let created = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "Old", "Old text"))
        .await
        .expect("create");
    BoardMutationService::new(Arc::clone(&seeded.boards), Arc::clone(&seeded.tasks))
        .move_task(MoveTaskRequest::new(
            seeded.board_id,
            created.id(),
            "inbox",
            "todo",
            0,
        ))
        .await
        .expect("move should succeed");

    let updated = service
        .update_task(
            UpdateTaskRequest::new(created.id())
                .with_title(" New ")
                .with_description("New text"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "New");
    assert_eq!(updated.description(), "New text");
    assert_eq!(updated.status(), ListTitle::Todo);
    assert_eq!(seeded.task(created.id()).await, updated);
    assert_eq!(ids_in(&seeded.board().await, ListTitle::Todo), vec![created.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_update_stores_nothing() {
    let (seeded, service) = empty_board().await;
    let created = service
        .create_task(CreateTaskRequest::new(seeded.user, seeded.board_id, "Keep", "Keep me"))
        .await
        .expect("create");

    let err = service
        .update_task(
            UpdateTaskRequest::new(created.id())
                .with_title("Changed")
                .with_description(" "),
        )
        .await
        .expect_err("blank description");

    assert_eq!(err.kind(), BoardServiceErrorKind::Validation);
    assert_eq!(seeded.task(created.id()).await, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_a_missing_task_is_not_found() {
    let (_, service) = empty_board().await;
    let missing = TaskId::new();

    let err = service
        .update_task(UpdateTaskRequest::new(missing).with_title("Anything"))
        .await
        .expect_err("task does not exist");

    assert!(matches!(err, BoardServiceError::TaskNotFound(id) if id == missing));
}
