//! Field sets behind the three creation surfaces.
//!
//! A draft holds whatever the user has typed so far. `validate` rejects a
//! submission with an empty required field; the store's create operations
//! only ever see validated drafts.

use chrono::{Duration, NaiveDate};
use kanban_core::config::DEFAULT_SPRINT_DURATION_DAYS;
use kanban_core::{KanbanError, KanbanResult};

use crate::project::DEFAULT_PROJECT_COLOR;
use crate::{
    NewSprint, NewTask, ProjectId, SprintId, SprintStatus, Tags, TaskPriority, TaskStatus,
};

/// The creation form currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSurface {
    ProjectForm,
    SprintForm,
    TaskForm,
}

fn require(field: &str, value: &str) -> KanbanResult<()> {
    if value.trim().is_empty() {
        return Err(KanbanError::missing_field(field));
    }
    Ok(())
}

/// End date `days` after `start`, falling back to the default sprint length
/// (or to `start` itself) when the date would leave the calendar range.
fn sprint_end(start: NaiveDate, days: u32) -> NaiveDate {
    let after = |days: u32| start.checked_add_signed(Duration::days(i64::from(days)));
    after(days)
        .or_else(|| after(DEFAULT_SPRINT_DURATION_DAYS))
        .unwrap_or(start)
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: DEFAULT_PROJECT_COLOR.to_string(),
        }
    }
}

impl ProjectDraft {
    pub fn validate(&self) -> KanbanResult<()> {
        require("Project name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintDraft {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
}

impl SprintDraft {
    /// Empty draft running from `today` for `duration_days`.
    pub fn new(today: NaiveDate, duration_days: u32) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            goal: String::new(),
            start_date: today,
            end_date: sprint_end(today, duration_days),
            status: SprintStatus::default(),
        }
    }

    pub fn validate(&self) -> KanbanResult<()> {
        require("Sprint name", &self.name)?;
        require("Sprint goal", &self.goal)
    }

    pub fn into_new_sprint(self, project_id: ProjectId) -> KanbanResult<NewSprint> {
        self.validate()?;
        Ok(NewSprint {
            name: self.name,
            description: self.description,
            goal: self.goal,
            project_id,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: String,
    pub story_points: Option<u32>,
    pub tags: Tags,
}

impl TaskDraft {
    pub fn validate(&self) -> KanbanResult<()> {
        require("Task title", &self.title)
    }

    pub fn into_new_task(
        self,
        sprint_id: SprintId,
        project_id: ProjectId,
    ) -> KanbanResult<NewTask> {
        self.validate()?;
        Ok(NewTask {
            assignee: optional(&self.assignee),
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            sprint_id,
            project_id,
            story_points: self.story_points,
            tags: self.tags,
        })
    }
}
