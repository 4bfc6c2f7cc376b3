use chrono::{DateTime, Utc};
use kanban_core::Identifiable;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::project::ProjectId;
use crate::sprint::SprintId;
use crate::tag::Tags;

pub type TaskId = Uuid;

/// Kanban status of a task. Doubles as the column identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Column order on the board; the first one is the form default.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == id)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Glyph shown next to a task title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityIcon {
    Flag,
    AlertCircle,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.as_str() == id)
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Medium => "#f59e0b",
            Self::High => "#ef4444",
            Self::Urgent => "#dc2626",
        }
    }

    pub fn icon(&self) -> PriorityIcon {
        match self {
            Self::Urgent => PriorityIcon::AlertCircle,
            Self::Low | Self::Medium | Self::High => PriorityIcon::Flag,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field set accepted by `BoardStore::create_task`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub sprint_id: SprintId,
    pub project_id: ProjectId,
    pub assignee: Option<String>,
    pub story_points: Option<u32>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: Option<String>,
    pub sprint_id: SprintId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub story_points: Option<u32>,
    #[serde(default)]
    pub tags: Tags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(fields: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            assignee: fields.assignee,
            sprint_id: fields.sprint_id,
            project_id: fields.project_id,
            story_points: fields.story_points,
            tags: fields.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// A copy of this task in another column.
    pub fn with_status(&self, status: TaskStatus, updated_at: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at,
            ..self.clone()
        }
    }

    pub fn in_sprint(&self, sprint_id: SprintId) -> bool {
        self.sprint_id == sprint_id
    }

    pub fn visible_tags(&self, limit: usize) -> (&[String], usize) {
        self.tags.visible(limit)
    }
}

impl Identifiable for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }
}
