//! Given steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::{ListTitle, Task, UserId},
    ports::TaskRepository,
    services::{CreateBoardRequest, CreateTaskRequest},
};

#[given(r#"a board with tasks "{names}" in "{list}""#)]
fn board_with_tasks(
    world: &mut BoardMoveWorld,
    names: String,
    list: String,
) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let status = ListTitle::try_from(list.as_str())
        .map_err(|err| eyre::eyre!("invalid list in scenario: {err}"))?;
    let board = run_async(
        world
            .boards
            .create_board(CreateBoardRequest::new(owner, "Scenario board")),
    )
    .wrap_err("create scenario board")?;
    world.board_id = Some(board.id);

    for name in names.split(',').map(str::trim) {
        let request = CreateTaskRequest::new(owner, board.id, name, format!("{name} details"))
            .with_status(status);
        let task = run_async(world.tasks.create_task(request))
            .wrap_err_with(|| format!("create scenario task {name}"))?;
        world.task_ids.insert(name.to_owned(), task.id());
    }
    Ok(())
}

#[given(r#"a task "{name}" linked to the board but held by no list"#)]
fn unreferenced_task(world: &mut BoardMoveWorld, name: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let task = Task::new(UserId::new(), name.as_str(), "not on any list", Some(board_id))?;
    run_async(world.task_store.store(&task)).wrap_err("store unreferenced task")?;
    world.task_ids.insert(name, task.id());
    Ok(())
}

#[given("a subscriber has joined the board")]
fn subscriber_joined(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    world.subscriber = Some(world.channels.subscribe(board_id)?);
    Ok(())
}
