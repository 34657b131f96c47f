//! Resolution of a task reference's current position within a board.

use super::{BoardList, ListTitle, TaskId};

/// Where a task reference currently sits within a board's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPlacement {
    /// The reference was found in the list at `list_index`, at `task_index`.
    FoundAt {
        /// Position of the holding list within the board.
        list_index: usize,
        /// Position of the reference within that list.
        task_index: usize,
    },
    /// No list references the task.
    NotFound,
}

/// Locates `task_id` among `lists`, trying the list named by `hint` first.
///
/// The hint is advisory: when the named list does not exist or does not hold
/// the task, every list is scanned in board order and the first match wins.
#[must_use]
pub fn locate_task(lists: &[BoardList], task_id: TaskId, hint: &str) -> TaskPlacement {
    let found_in = |list_index: usize, list: &BoardList| {
        list.position_of(task_id)
            .map(|task_index| TaskPlacement::FoundAt {
                list_index,
                task_index,
            })
    };

    let hinted = ListTitle::try_from(hint).ok().and_then(|title| {
        lists
            .iter()
            .enumerate()
            .find(|(_, list)| list.title() == title)
            .and_then(|(list_index, list)| found_in(list_index, list))
    });

    hinted
        .or_else(|| {
            lists
                .iter()
                .enumerate()
                .find_map(|(list_index, list)| found_in(list_index, list))
        })
        .unwrap_or(TaskPlacement::NotFound)
}

/// Result of relocating a task reference within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The reference was removed from `from` and inserted into `to`.
    Relocated {
        /// List the reference was taken from.
        from: ListTitle,
        /// List the reference was inserted into.
        to: ListTitle,
        /// Effective insertion index after clamping.
        index: usize,
    },
    /// No list referenced the task; it was inserted into `to` only.
    Recovered {
        /// List the reference was inserted into.
        to: ListTitle,
        /// Effective insertion index after clamping.
        index: usize,
    },
}

impl MoveOutcome {
    /// Returns the destination list.
    #[must_use]
    pub const fn destination(self) -> ListTitle {
        match self {
            Self::Relocated { to, .. } | Self::Recovered { to, .. } => to,
        }
    }

    /// Returns `true` when the task had to be recovered from an orphaned state.
    #[must_use]
    pub const fn is_recovery(self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}
