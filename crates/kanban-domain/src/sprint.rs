use chrono::NaiveDate;
use kanban_core::Identifiable;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::project::ProjectId;

pub type SprintId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    Planning,
    Active,
    Completed,
    Cancelled,
}

impl SprintStatus {
    /// Options in form order; the first one is the default.
    pub const ALL: [SprintStatus; 4] = [
        SprintStatus::Planning,
        SprintStatus::Active,
        SprintStatus::Completed,
        SprintStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Planning => "#f59e0b",
            Self::Active => "#10b981",
            Self::Completed => "#6b7280",
            Self::Cancelled => "#ef4444",
        }
    }
}

impl Default for SprintStatus {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field set accepted by `BoardStore::create_sprint`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSprint {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub project_id: ProjectId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    pub description: String,
    pub project_id: ProjectId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
    pub goal: String,
}

impl Sprint {
    pub fn new(fields: NewSprint) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            description: fields.description,
            project_id: fields.project_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
            goal: fields.goal,
        }
    }

    pub fn belongs_to(&self, project_id: ProjectId) -> bool {
        self.project_id == project_id
    }

    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

impl Identifiable for Sprint {
    type Id = SprintId;

    fn id(&self) -> SprintId {
        self.id
    }
}
