//! Then steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{ListTitle, TaskId},
    ports::BoardEvent,
    services::BoardServiceErrorKind,
};

fn list_ids(world: &BoardMoveWorld, list: &str) -> Result<Vec<TaskId>, eyre::Report> {
    let title = ListTitle::try_from(list)
        .map_err(|err| eyre::eyre!("invalid list in scenario: {err}"))?;
    let board = run_async(world.boards.get_board(world.board_id()?))?;
    Ok(board
        .list(title)
        .map(|expanded| expanded.tasks.iter().map(|task| task.id).collect())
        .unwrap_or_default())
}

#[then("the move succeeds")]
fn move_succeeds(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    match world.last_move.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected the move to succeed, got {err}")),
        None => Err(eyre::eyre!("no move was attempted")),
    }
}

#[then("the move fails with a validation error")]
fn move_fails_with_validation_error(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no move was attempted"))?;

    match result {
        Err(err) if err.kind() == BoardServiceErrorKind::Validation => Ok(()),
        other => Err(eyre::eyre!("expected a validation error, got {other:?}")),
    }
}

#[then(r#"list "{list}" holds "{names}""#)]
fn list_holds(world: &BoardMoveWorld, list: String, names: String) -> Result<(), eyre::Report> {
    let expected = world.task_ids_for(&names)?;
    let actual = list_ids(world, &list)?;
    eyre::ensure!(
        actual == expected,
        "list {list}: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"list "{list}" is empty"#)]
fn list_is_empty(world: &BoardMoveWorld, list: String) -> Result<(), eyre::Report> {
    let actual = list_ids(world, &list)?;
    eyre::ensure!(actual.is_empty(), "list {list} should be empty, found {actual:?}");
    Ok(())
}

#[then(r#"task "{name}" has status "{status}""#)]
fn task_has_status(world: &BoardMoveWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&name)?;
    let board = run_async(world.boards.get_board(world.board_id()?))?;
    let task = board
        .lists
        .iter()
        .flat_map(|list| list.tasks.iter())
        .find(|task| task.id == task_id)
        .ok_or_else(|| eyre::eyre!("task {name} is not on the board"))?;
    eyre::ensure!(
        task.status.as_str() == status,
        "task {name}: expected status {status}, found {}",
        task.status
    );
    Ok(())
}

#[then("the subscriber receives the moved board")]
fn subscriber_receives_board(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let returned = match world.last_move.as_ref() {
        Some(Ok(view)) => view.clone(),
        _ => return Err(eyre::eyre!("expected a successful move")),
    };
    let subscriber = world
        .subscriber
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no subscriber joined"))?;

    let BoardEvent::TaskMoved { board_id: event_board, board } = subscriber.try_recv()?;
    eyre::ensure!(event_board == board_id, "event names the wrong board");
    eyre::ensure!(board == returned, "event should carry the returned board");
    Ok(())
}
