//! Task group store
//!
//! Tasks are grouped per teammate. Groups are kept sorted ascending by
//! teammate name (case-insensitive), and each group's tasks ascending by due
//! date with insertion order preserved on ties. Group lookup keys on the
//! exact stored name; only ordering and duplicate detection are
//! case-insensitive.

use chrono::NaiveDate;

use crate::date;
use crate::error::{Error, Result};
use crate::roster::collate;

/// One dated to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub due: NaiveDate,
    pub completed: bool,
}

/// All tasks owned by one teammate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub teammate: String,
    pub tasks: Vec<Task>,
}

impl Group {
    fn new(teammate: &str) -> Self {
        Self {
            teammate: teammate.to_string(),
            tasks: Vec::new(),
        }
    }

    fn sort_tasks(&mut self) {
        // Stable: ties keep insertion order.
        self.tasks.sort_by_key(|task| task.due);
    }
}

/// The per-teammate task lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    groups: Vec<Group>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current groups, ordered by teammate name.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Find a group by exact teammate name.
    pub fn group(&self, teammate: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.teammate == teammate)
    }

    /// Assign a new task to `teammate`.
    ///
    /// Empty text is a `Validation` error; a due date before `today` is a
    /// `PastDate` error. On success the task is appended with
    /// `completed: false` (creating the group if absent) and the group is
    /// re-sorted by due date.
    pub fn assign(
        &mut self,
        teammate: &str,
        text: &str,
        due: NaiveDate,
        today: NaiveDate,
    ) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("task text cannot be empty".to_string()));
        }
        if due < today {
            return Err(Error::PastDate {
                due: date::format_day(due),
                today: date::format_day(today),
            });
        }

        let group = self.group_mut_or_create(teammate);
        group.tasks.push(Task {
            text: text.to_string(),
            due,
            completed: false,
        });
        group.sort_tasks();
        Ok(())
    }

    /// Flip the completion flag of the `index`-th task (1-based, display
    /// order) in `teammate`'s group. Returns the new flag. The order is
    /// due-date based, so no re-sort happens.
    pub fn toggle(&mut self, teammate: &str, index: usize) -> Result<bool> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.teammate == teammate)
            .ok_or_else(|| Error::Validation(format!("no tasks for teammate \"{teammate}\"")))?;

        let task = index
            .checked_sub(1)
            .and_then(|idx| group.tasks.get_mut(idx))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "no task #{index} for teammate \"{teammate}\""
                ))
            })?;

        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove every completed task across all groups, then prune groups left
    /// with zero tasks. Returns the number of removed tasks.
    pub fn clear_completed(&mut self) -> usize {
        let mut removed = 0;
        for group in &mut self.groups {
            let before = group.tasks.len();
            group.tasks.retain(|task| !task.completed);
            removed += before - group.tasks.len();
        }
        self.groups.retain(|group| !group.tasks.is_empty());
        removed
    }

    /// Empty the board. Used by reset.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Total task count across all groups.
    pub fn total_tasks(&self) -> usize {
        self.groups.iter().map(|group| group.tasks.len()).sum()
    }

    /// True when no tasks exist anywhere (the empty-state indicator).
    pub fn is_empty(&self) -> bool {
        self.total_tasks() == 0
    }

    /// Insert a fully-built group during snapshot restore. Tasks are
    /// re-sorted by due date; empty groups are skipped.
    pub(crate) fn insert_group(&mut self, teammate: &str, tasks: Vec<Task>) {
        if tasks.is_empty() {
            return;
        }
        let group = self.group_mut_or_create(teammate);
        group.tasks = tasks;
        group.sort_tasks();
    }

    fn group_mut_or_create(&mut self, teammate: &str) -> &mut Group {
        // Exact-name lookup; ordering alone is case-insensitive.
        if let Some(idx) = self
            .groups
            .iter()
            .position(|group| group.teammate == teammate)
        {
            return &mut self.groups[idx];
        }

        self.groups.push(Group::new(teammate));
        self.groups.sort_by_key(|group| collate(&group.teammate));
        let idx = self
            .groups
            .iter()
            .position(|group| group.teammate == teammate)
            .unwrap_or(self.groups.len() - 1);
        &mut self.groups[idx]
    }
}
