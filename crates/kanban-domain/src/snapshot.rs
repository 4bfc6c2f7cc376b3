//! Point-in-time view of the board.
//!
//! A `Snapshot` shares the store's collections through `Arc`, so taking one
//! is cheap. The store replaces a whole collection on every mutation rather
//! than editing it in place, which means a snapshot keeps seeing exactly
//! the version it was taken from.

use std::sync::Arc;

use crate::filter::{visible_sprints, visible_tasks};
use crate::{Project, ProjectId, Sprint, SprintId, Task};
use kanban_core::find_by_id;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) projects: Arc<Vec<Project>>,
    pub(crate) sprints: Arc<Vec<Sprint>>,
    pub(crate) tasks: Arc<Vec<Task>>,
    pub(crate) selected_project_id: Option<ProjectId>,
    pub(crate) selected_sprint_id: Option<SprintId>,
    pub(crate) version: u64,
}

impl Snapshot {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected_project_id(&self) -> Option<ProjectId> {
        self.selected_project_id
    }

    pub fn selected_sprint_id(&self) -> Option<SprintId> {
        self.selected_sprint_id
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project_id
            .and_then(|id| find_by_id(self.projects(), id))
    }

    pub fn selected_sprint(&self) -> Option<&Sprint> {
        self.selected_sprint_id
            .and_then(|id| find_by_id(self.sprints(), id))
    }

    /// Sprints of the selected project; empty without a selection.
    pub fn visible_sprints(&self) -> Vec<&Sprint> {
        match self.selected_project_id {
            Some(project_id) => visible_sprints(self.sprints(), project_id),
            None => Vec::new(),
        }
    }

    /// Tasks of the selected sprint; empty without a selection.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.selected_sprint_id {
            Some(sprint_id) => visible_tasks(self.tasks(), sprint_id),
            None => Vec::new(),
        }
    }

    /// Store version this snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.sprints.is_empty() && self.tasks.is_empty()
    }

    /// Whether two snapshots share the same task collection allocation.
    pub fn shares_tasks_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.visible_sprints().is_empty());
        assert!(snapshot.visible_tasks().is_empty());
        assert!(snapshot.selected_project().is_none());
        assert_eq!(snapshot.version(), 0);
    }
}
