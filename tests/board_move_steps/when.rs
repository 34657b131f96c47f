//! When steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::services::MoveTaskRequest;

#[when(r#"task "{name}" is moved from "{from_list}" to "{to_list}" at {insert_at:u64}"#)]
fn move_task(
    world: &mut BoardMoveWorld,
    name: String,
    from_list: String,
    to_list: String,
    insert_at: u64,
) -> Result<(), eyre::Report> {
    let request = MoveTaskRequest::new(
        world.board_id()?,
        world.task_id(&name)?,
        from_list,
        to_list,
        usize::try_from(insert_at)?,
    );
    world.last_move = Some(run_async(world.moves.move_and_broadcast(request)));
    Ok(())
}
