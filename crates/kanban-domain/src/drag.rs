//! Drag-and-drop status transitions.
//!
//! At most one task is being dragged at a time. Dropping it on a column
//! moves it to that column's status; any transition between columns is
//! allowed. Drops outside a column, or onto a surface that is not one of
//! the four columns, change nothing.

use crate::column::KanbanColumn;
use crate::store::BoardStore;
use crate::{Task, TaskId, TaskStatus};

/// What a finished drag did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Moved {
        task_id: TaskId,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// Released outside any drop target.
    NoTarget,
    /// Released over something that is not a board column.
    InvalidTarget(String),
    /// Valid column, but the dragged id names no task.
    TaskMissing,
}

impl DragOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<TaskId>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a task. Unknown ids leave no active drag.
    pub fn drag_start(&mut self, store: &BoardStore, task_id: TaskId) -> bool {
        self.active = store.task(task_id).map(|task| task.id);
        self.active.is_some()
    }

    pub fn active_task_id(&self) -> Option<TaskId> {
        self.active
    }

    /// The task under the pointer, for an overlay.
    pub fn active_task<'a>(&self, store: &'a BoardStore) -> Option<&'a Task> {
        self.active.and_then(|id| store.task(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Abandon the current drag without a drop.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Finish a drag of `task_id` released over `over`.
    pub fn drag_end(
        &mut self,
        store: &mut BoardStore,
        task_id: TaskId,
        over: Option<&str>,
    ) -> DragOutcome {
        self.active = None;

        let Some(target_id) = over else {
            tracing::debug!("Drag of {} released outside any column", task_id);
            return DragOutcome::NoTarget;
        };
        let Some(column) = KanbanColumn::from_target(target_id) else {
            tracing::debug!("Drag of {} dropped on non-column {:?}", task_id, target_id);
            return DragOutcome::InvalidTarget(target_id.to_string());
        };
        let Some(from) = store.task(task_id).map(|task| task.status) else {
            tracing::debug!("Dropped task {} no longer exists", task_id);
            return DragOutcome::TaskMissing;
        };

        store.update_task_status(task_id, column.id);
        DragOutcome::Moved {
            task_id,
            from,
            to: column.id,
        }
    }
}
