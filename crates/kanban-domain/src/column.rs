//! The four fixed board columns.
//!
//! A column's id is the identifier of the task status it holds, so a drop
//! target id resolves to a status by table lookup.

use crate::task::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanbanColumn {
    pub id: TaskStatus,
    pub title: &'static str,
    pub color: &'static str,
}

pub static BOARD_COLUMNS: [KanbanColumn; 4] = [
    KanbanColumn {
        id: TaskStatus::Todo,
        title: "To Do",
        color: "#e2e8f0",
    },
    KanbanColumn {
        id: TaskStatus::InProgress,
        title: "In Progress",
        color: "#fef3c7",
    },
    KanbanColumn {
        id: TaskStatus::Review,
        title: "Review",
        color: "#fde68a",
    },
    KanbanColumn {
        id: TaskStatus::Done,
        title: "Done",
        color: "#d1fae5",
    },
];

impl KanbanColumn {
    /// Resolve a drop target id. Anything that is not a column id is `None`.
    pub fn from_target(target_id: &str) -> Option<&'static KanbanColumn> {
        BOARD_COLUMNS
            .iter()
            .find(|column| column.id.as_str() == target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_status_order() {
        let ids: Vec<TaskStatus> = BOARD_COLUMNS.iter().map(|c| c.id).collect();
        assert_eq!(ids, TaskStatus::ALL.to_vec());
    }

    #[test]
    fn test_every_status_has_a_column() {
        for status in TaskStatus::ALL {
            let column = KanbanColumn::from_target(status.as_str()).unwrap();
            assert_eq!(column.id, status);
        }
    }

    #[test]
    fn test_from_target() {
        let column = KanbanColumn::from_target("in-progress").unwrap();
        assert_eq!(column.id, TaskStatus::InProgress);
        assert_eq!(column.title, "In Progress");

        assert!(KanbanColumn::from_target("In Progress").is_none());
        assert!(KanbanColumn::from_target("sidebar").is_none());
        assert!(KanbanColumn::from_target("").is_none());
    }
}
