//! Board aggregate root.

use super::{
    BoardDomainError, BoardId, BoardList, ListTitle, MoveOutcome, TaskId, TaskPlacement, UserId,
    locate_task,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Longest accepted board title, in characters.
pub const MAX_BOARD_TITLE_CHARS: usize = 255;

fn validated_title(raw: &str) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyBoardTitle);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_BOARD_TITLE_CHARS {
        return Err(BoardDomainError::BoardTitleTooLong {
            max: MAX_BOARD_TITLE_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

fn owner_first(owner: UserId, members: impl IntoIterator<Item = UserId>) -> Vec<UserId> {
    let mut all_members = vec![owner];
    for member in members {
        if !all_members.contains(&member) {
            all_members.push(member);
        }
    }
    all_members
}

/// A named collection of the three fixed lists, owned by a user and
/// optionally shared with members.
///
/// The lists are embedded and saved as one document, so every list mutation
/// below is persisted by a single board write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    owner: UserId,
    title: String,
    members: Vec<UserId>,
    lists: Vec<BoardList>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted title.
    pub title: String,
    /// Users permitted to view the board.
    pub members: Vec<UserId>,
    /// Persisted lists, in stored order.
    pub lists: Vec<BoardList>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board with the three fixed lists, all empty.
    ///
    /// The owner is always the first member; duplicate members are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardTitle`] when the title is blank
    /// and [`BoardDomainError::BoardTitleTooLong`] when it exceeds
    /// [`MAX_BOARD_TITLE_CHARS`].
    pub fn new(
        owner: UserId,
        title: impl Into<String>,
        members: impl IntoIterator<Item = UserId>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw_title: String = title.into();
        Ok(Self {
            id: BoardId::new(),
            owner,
            title: validated_title(&raw_title)?,
            members: owner_first(owner, members),
            lists: ListTitle::ALL.into_iter().map(BoardList::empty).collect(),
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            members: data.members,
            lists: data.lists,
            created_at: data.created_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the members permitted to view the board.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the embedded lists in board order.
    #[must_use]
    pub fn lists(&self) -> &[BoardList] {
        &self.lists
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when `user_id` owns or is a member of the board.
    #[must_use]
    pub fn is_visible_to(&self, user_id: UserId) -> bool {
        self.owner == user_id || self.members.contains(&user_id)
    }

    /// Returns the list with the given title, if the board has one.
    #[must_use]
    pub fn list(&self, title: ListTitle) -> Option<&BoardList> {
        self.lists.iter().find(|list| list.title() == title)
    }

    /// Returns the total number of task references across all lists.
    #[must_use]
    pub fn task_reference_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks().len()).sum()
    }

    /// Returns every referenced task id in board order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.lists
            .iter()
            .flat_map(|list| list.tasks().iter().copied())
            .collect()
    }

    /// Replaces the board title.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Board::new`]; the title is
    /// left unchanged on error.
    pub fn rename(&mut self, title: impl Into<String>) -> Result<(), BoardDomainError> {
        let raw_title: String = title.into();
        self.title = validated_title(&raw_title)?;
        Ok(())
    }

    /// Replaces the member set. The owner stays first and duplicates are
    /// dropped.
    pub fn set_members(&mut self, members: impl IntoIterator<Item = UserId>) {
        self.members = owner_first(self.owner, members);
    }

    /// Appends a newly created task to the list matching its status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::StatusListNotFound`] when no list carries
    /// the status title.
    pub fn place_new_task(
        &mut self,
        task_id: TaskId,
        status: ListTitle,
    ) -> Result<(), BoardDomainError> {
        let list = self
            .lists
            .iter_mut()
            .find(|list| list.title() == status)
            .ok_or_else(|| BoardDomainError::StatusListNotFound(status.as_str().to_owned()))?;
        list.push(task_id);
        Ok(())
    }

    /// Removes `task_id` from whichever list holds it, preferring `hint`.
    ///
    /// Returns the title of the list it was removed from, or `None` when no
    /// list referenced the task.
    pub fn detach_task(&mut self, task_id: TaskId, hint: ListTitle) -> Option<ListTitle> {
        let TaskPlacement::FoundAt {
            list_index,
            task_index,
        } = locate_task(&self.lists, task_id, hint.as_str())
        else {
            return None;
        };
        let list = self.lists.get_mut(list_index)?;
        list.remove_at(task_index).map(|_| list.title())
    }

    /// Moves `task_id` into the list titled `to_list` at `insert_at`.
    ///
    /// The source is resolved with [`locate_task`] using `from_hint`. A task
    /// referenced by no list is inserted into the destination without a
    /// removal. `insert_at` past the end of the destination appends. The
    /// destination is validated before any list is touched, so a failed move
    /// leaves every list unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DestinationListNotFound`] when `to_list`
    /// names no list on this board.
    pub fn relocate_task(
        &mut self,
        task_id: TaskId,
        from_hint: &str,
        to_list: &str,
        insert_at: usize,
    ) -> Result<MoveOutcome, BoardDomainError> {
        let destination = self
            .destination_index(to_list)
            .ok_or_else(|| BoardDomainError::DestinationListNotFound(to_list.to_owned()))?;

        let removed_from = match locate_task(&self.lists, task_id, from_hint) {
            TaskPlacement::FoundAt {
                list_index,
                task_index,
            } => self.lists.get_mut(list_index).and_then(|source| {
                source.remove_at(task_index).map(|_| source.title())
            }),
            TaskPlacement::NotFound => None,
        };

        let target = self
            .lists
            .get_mut(destination)
            .ok_or_else(|| BoardDomainError::DestinationListNotFound(to_list.to_owned()))?;
        target.insert_at(insert_at, task_id);
        let to = target.title();
        let index = insert_at.min(target.tasks().len().saturating_sub(1));

        Ok(match removed_from {
            Some(from) => MoveOutcome::Relocated { from, to, index },
            None => MoveOutcome::Recovered { to, index },
        })
    }

    fn destination_index(&self, to_list: &str) -> Option<usize> {
        let title = ListTitle::try_from(to_list).ok()?;
        self.lists.iter().position(|list| list.title() == title)
    }
}
