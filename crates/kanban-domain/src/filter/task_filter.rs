use crate::column::{KanbanColumn, BOARD_COLUMNS};
use crate::{SprintId, Task, TaskStatus};
use std::borrow::Borrow;

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Tasks planned into one sprint.
pub struct SprintTaskFilter {
    sprint_id: SprintId,
}

impl SprintTaskFilter {
    pub fn new(sprint_id: SprintId) -> Self {
        Self { sprint_id }
    }
}

impl TaskFilter for SprintTaskFilter {
    fn matches(&self, task: &Task) -> bool {
        task.in_sprint(self.sprint_id)
    }
}

/// Tasks sitting in one column.
pub struct StatusFilter {
    status: TaskStatus,
}

impl StatusFilter {
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        task.status == self.status
    }
}

/// Tasks of a sprint, in insertion order.
pub fn visible_tasks(tasks: &[Task], sprint_id: SprintId) -> Vec<&Task> {
    let filter = SprintTaskFilter::new(sprint_id);
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// One column's share of an already-filtered task list.
pub fn tasks_in_column<T: Borrow<Task>>(tasks: &[T], status: TaskStatus) -> Vec<&Task> {
    let filter = StatusFilter::new(status);
    tasks
        .iter()
        .map(<T as Borrow<Task>>::borrow)
        .filter(|t| filter.matches(t))
        .collect()
}

/// Task count per board column, in column order.
pub fn column_counts<T: Borrow<Task>>(tasks: &[T]) -> Vec<(&'static KanbanColumn, usize)> {
    BOARD_COLUMNS
        .iter()
        .map(|column| (column, tasks_in_column(tasks, column.id).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewTask, TaskPriority};
    use chrono::Utc;
    use uuid::Uuid;

    fn task(title: &str, sprint_id: SprintId, status: TaskStatus) -> Task {
        Task::new(
            NewTask {
                title: title.to_string(),
                description: String::new(),
                status,
                priority: TaskPriority::Medium,
                sprint_id,
                project_id: Uuid::new_v4(),
                assignee: None,
                story_points: None,
                tags: Default::default(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_visible_tasks_by_sprint() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let tasks = vec![
            task("a", s1, TaskStatus::Todo),
            task("b", s2, TaskStatus::Todo),
            task("c", s1, TaskStatus::Done),
        ];

        let titles: Vec<&str> = visible_tasks(&tasks, s1)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(visible_tasks(&tasks, Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_tasks_in_column_over_borrowed_list() {
        let s1 = Uuid::new_v4();
        let tasks = vec![
            task("a", s1, TaskStatus::Todo),
            task("b", s1, TaskStatus::Review),
            task("c", s1, TaskStatus::Todo),
        ];
        let visible = visible_tasks(&tasks, s1);

        let todo = tasks_in_column(&visible, TaskStatus::Todo);
        assert_eq!(todo.len(), 2);
        assert!(tasks_in_column(&visible, TaskStatus::Done).is_empty());
    }

    #[test]
    fn test_column_counts() {
        let s1 = Uuid::new_v4();
        let tasks = vec![
            task("a", s1, TaskStatus::Todo),
            task("b", s1, TaskStatus::InProgress),
            task("c", s1, TaskStatus::InProgress),
        ];

        let counts: Vec<(TaskStatus, usize)> = column_counts(&tasks)
            .into_iter()
            .map(|(column, n)| (column.id, n))
            .collect();
        assert_eq!(
            counts,
            vec![
                (TaskStatus::Todo, 1),
                (TaskStatus::InProgress, 2),
                (TaskStatus::Review, 0),
                (TaskStatus::Done, 0),
            ]
        );
    }
}
