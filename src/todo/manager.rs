//! In-memory task list.

use chrono::NaiveDate;
use tracing::debug;

use super::error::{Result, TodoError};
use super::task::Task;

/// Owns the ordered task list for one program run.
///
/// Insertion order is display order, and every index taken or reported by
/// this type is a position in that order. Priorities are read back from the
/// tasks themselves, so [`TodoManager::priorities`] is always index-aligned
/// with [`TodoManager::tasks`].
#[derive(Debug, Default)]
pub struct TodoManager {
    tasks: Vec<Task>,
}

impl TodoManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task at index `len()`.
    pub fn add_task(&mut self, title: impl Into<String>, priority: i64, deadline: NaiveDate) {
        let task = Task::new(title, priority, deadline);
        debug!(index = self.tasks.len(), title = task.title(), priority, %deadline, "task added");
        self.tasks.push(task);
    }

    /// Numbered display lines (`"1. ..."`) in insertion order.
    ///
    /// Returns an empty list when there are no tasks.
    #[must_use]
    pub fn view_tasks(&self, today: NaiveDate) -> Vec<String> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task.render_on(today)))
            .collect()
    }

    /// Marks the task at the zero-based `index` complete.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] and leaves the list untouched when
    /// `index` is out of range.
    pub fn complete_task(&mut self, index: usize) -> Result<()> {
        let len = self.tasks.len();
        let task = self.tasks.get_mut(index).ok_or(TodoError::InvalidIndex { index, len })?;
        task.mark_complete();
        debug!(index, title = task.title(), "task completed");
        Ok(())
    }

    /// Removes and returns the task at the zero-based `index`.
    ///
    /// Tasks after `index` shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] and leaves the list untouched when
    /// `index` is out of range.
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        let len = self.tasks.len();
        if index >= len {
            return Err(TodoError::InvalidIndex { index, len });
        }
        let task = self.tasks.remove(index);
        debug!(index, title = task.title(), "task deleted");
        Ok(task)
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Priorities, index-aligned with [`TodoManager::tasks`].
    #[must_use]
    pub fn priorities(&self) -> Vec<i64> {
        self.tasks.iter().map(Task::priority).collect()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no tasks have been added (or all were deleted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn assert_aligned(manager: &TodoManager) {
        let priorities = manager.priorities();
        assert_eq!(priorities.len(), manager.tasks().len());
        for (task, priority) in manager.tasks().iter().zip(&priorities) {
            assert_eq!(task.priority(), *priority);
        }
    }

    fn manager_with(titles: &[(&str, i64)]) -> TodoManager {
        let mut manager = TodoManager::new();
        for (title, priority) in titles {
            manager.add_task(*title, *priority, today());
        }
        manager
    }

    #[test]
    fn empty_manager_has_no_listing() {
        let manager = TodoManager::new();
        assert!(manager.is_empty());
        assert!(manager.view_tasks(today()).is_empty());
        assert_aligned(&manager);
    }

    #[test]
    fn add_appends_in_order() {
        let manager = manager_with(&[("a", 1), ("b", 5), ("c", 3)]);
        let titles: Vec<&str> = manager.tasks().iter().map(Task::title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(manager.priorities(), [1, 5, 3]);
        assert_aligned(&manager);
    }

    #[test]
    fn priorities_stay_aligned_through_adds_and_deletes() {
        let mut manager = TodoManager::new();
        // (true, p) adds a task with priority p; (false, i) deletes index i.
        let ops: [(bool, i64); 9] = [
            (true, 4),
            (true, 2),
            (true, 9),
            (false, 1),
            (true, -3),
            (false, 0),
            (true, 7),
            (false, 2),
            (true, 1),
        ];
        for (add, value) in ops {
            if add {
                manager.add_task(format!("p{value}"), value, today());
            } else {
                let _ = manager.delete_task(usize::try_from(value).unwrap());
            }
            assert_aligned(&manager);
        }
        assert_eq!(manager.priorities(), [9, -3, 1]);
    }

    #[test]
    fn complete_only_touches_target() {
        let mut manager = manager_with(&[("a", 1), ("b", 2)]);
        manager.add_task("new", 3, today());
        manager.complete_task(2).unwrap();

        let flags: Vec<bool> = manager.tasks().iter().map(Task::is_completed).collect();
        assert_eq!(flags, [false, false, true]);
        assert_eq!(manager.completed_count(), 1);
    }

    #[test]
    fn complete_twice_is_not_an_error() {
        let mut manager = manager_with(&[("a", 1)]);
        manager.complete_task(0).unwrap();
        assert!(manager.complete_task(0).is_ok());
        assert_eq!(manager.completed_count(), 1);
    }

    #[test]
    fn delete_shifts_later_tasks_down() {
        let mut manager = manager_with(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let removed = manager.delete_task(1).unwrap();

        assert_eq!(removed.title(), "b");
        assert_eq!(manager.len(), 3);
        let titles: Vec<&str> = manager.tasks().iter().map(Task::title).collect();
        assert_eq!(titles, ["a", "c", "d"]);
        assert_eq!(manager.priorities(), [1, 3, 4]);
    }

    #[test]
    fn out_of_range_index_changes_nothing() {
        let mut manager = manager_with(&[("a", 1), ("b", 2)]);
        let before = manager.tasks().to_vec();

        assert_eq!(manager.complete_task(2), Err(TodoError::InvalidIndex { index: 2, len: 2 }));
        assert_eq!(
            manager.delete_task(usize::MAX).unwrap_err(),
            TodoError::InvalidIndex { index: usize::MAX, len: 2 }
        );
        assert_eq!(manager.tasks(), before.as_slice());
    }

    #[test]
    fn view_lists_numbered_lines() {
        let mut manager = TodoManager::new();
        manager.add_task("Write report", 3, today() + Duration::days(10));
        manager.add_task("Call bank", 1, today());

        assert_eq!(
            manager.view_tasks(today()),
            [
                "1. Write report | Priority: 3 | Pending | Days Left: 10",
                "2. Call bank | Priority: 1 | Pending | Days Left: 0",
            ]
        );

        manager.complete_task(0).unwrap();
        assert_eq!(
            manager.view_tasks(today())[0],
            "1. Write report | Priority: 3 | Done | Days Left: 10"
        );
    }
}
