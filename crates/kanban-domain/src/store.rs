//! The board's single state value.
//!
//! `BoardStore` owns every project, sprint and task plus the two selection
//! pointers and the open creation surface. It is the only place state
//! changes, and only through the operations below. None of them can fail:
//! validation happens on drafts before a create call is made.
//!
//! Collections are copy-on-write. Each mutation builds a new `Vec`, swaps
//! the `Arc`, and bumps `version`; unchanged tasks are carried over by
//! value, so a renderer diffing two snapshots sees exactly one changed
//! entry after a status transition.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use kanban_core::clock::now_after;
use kanban_core::{
    find_by_id, AppConfig, Clock, KanbanError, KanbanResult, Selection, SystemClock,
};

use crate::filter::{visible_sprints, visible_tasks};
use crate::forms::{InputSurface, ProjectDraft, SprintDraft, TaskDraft};
use crate::snapshot::Snapshot;
use crate::{
    NewSprint, NewTask, Project, ProjectId, Sprint, SprintId, Task, TaskId, TaskStatus,
};

/// Board-wide settings taken from the application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    pub sprint_duration_days: u32,
    pub tag_display_limit: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl BoardSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            sprint_duration_days: config.effective_sprint_duration_days(),
            tag_display_limit: config.effective_tag_display_limit(),
        }
    }
}

pub struct BoardStore {
    projects: Arc<Vec<Project>>,
    sprints: Arc<Vec<Sprint>>,
    tasks: Arc<Vec<Task>>,
    selected_project: Selection<ProjectId>,
    selected_sprint: Selection<SprintId>,
    open_surface: Option<InputSurface>,
    settings: BoardSettings,
    version: u64,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("projects", &self.projects.len())
            .field("sprints", &self.sprints.len())
            .field("tasks", &self.tasks.len())
            .field("selected_project", &self.selected_project.get())
            .field("selected_sprint", &self.selected_sprint.get())
            .field("open_surface", &self.open_surface)
            .field("version", &self.version)
            .finish()
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Empty board on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            projects: Arc::default(),
            sprints: Arc::default(),
            tasks: Arc::default(),
            selected_project: Selection::new(),
            selected_sprint: Selection::new(),
            open_surface: None,
            settings: BoardSettings::default(),
            version: 0,
            clock,
        }
    }

    /// Board configured from `config`, seeded with sample data unless the
    /// config turns that off.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut store = Self::new().with_settings(BoardSettings::from_config(config));
        if config.effective_seed_sample_data() {
            crate::seed::seed_sample_data(&mut store);
        }
        store
    }

    pub fn with_settings(mut self, settings: BoardSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> BoardSettings {
        self.settings
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    // Reads

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        find_by_id(self.projects(), id)
    }

    pub fn sprint(&self, id: SprintId) -> Option<&Sprint> {
        find_by_id(self.sprints(), id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        find_by_id(self.tasks(), id)
    }

    pub fn selected_project_id(&self) -> Option<ProjectId> {
        self.selected_project.get()
    }

    pub fn selected_sprint_id(&self) -> Option<SprintId> {
        self.selected_sprint.get()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project_id().and_then(|id| self.project(id))
    }

    pub fn selected_sprint(&self) -> Option<&Sprint> {
        self.selected_sprint_id().and_then(|id| self.sprint(id))
    }

    /// Sprints belonging to the selected project.
    pub fn selected_project_sprints(&self) -> Vec<&Sprint> {
        match self.selected_project_id() {
            Some(project_id) => visible_sprints(self.sprints(), project_id),
            None => Vec::new(),
        }
    }

    /// Tasks belonging to the selected sprint.
    pub fn selected_sprint_tasks(&self) -> Vec<&Task> {
        match self.selected_sprint_id() {
            Some(sprint_id) => visible_tasks(self.tasks(), sprint_id),
            None => Vec::new(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            projects: Arc::clone(&self.projects),
            sprints: Arc::clone(&self.sprints),
            tasks: Arc::clone(&self.tasks),
            selected_project_id: self.selected_project.get(),
            selected_sprint_id: self.selected_sprint.get(),
            version: self.version,
        }
    }

    // Selection

    /// Select a project. The sprint selection is always cleared, since the
    /// selected sprint may belong to another project.
    pub fn select_project(&mut self, project_id: ProjectId) {
        self.selected_project.select(project_id);
        self.selected_sprint.clear();
        self.bump();
        tracing::debug!("Selected project {}", project_id);
    }

    pub fn select_sprint(&mut self, sprint_id: SprintId) {
        self.selected_sprint.select(sprint_id);
        self.bump();
        tracing::debug!("Selected sprint {}", sprint_id);
    }

    // Input surfaces

    pub fn open_surface(&self) -> Option<InputSurface> {
        self.open_surface
    }

    /// A sprint needs a project to go into; a task needs a sprint and a
    /// project.
    pub fn can_open(&self, surface: InputSurface) -> bool {
        match surface {
            InputSurface::ProjectForm => true,
            InputSurface::SprintForm => self.selected_project.has_selection(),
            InputSurface::TaskForm => {
                self.selected_project.has_selection() && self.selected_sprint.has_selection()
            }
        }
    }

    /// Open a creation surface, replacing any open one. Returns false when
    /// the required selection is missing.
    pub fn show_surface(&mut self, surface: InputSurface) -> bool {
        if !self.can_open(surface) {
            return false;
        }
        self.open_surface = Some(surface);
        true
    }

    pub fn close_surface(&mut self) {
        self.open_surface = None;
    }

    /// Empty sprint form running from today for the configured duration.
    pub fn sprint_draft(&self) -> SprintDraft {
        SprintDraft::new(self.today(), self.settings.sprint_duration_days)
    }

    // Creation

    pub fn create_project(&mut self, name: String, description: String, color: String) -> Project {
        let project = Project::new(name, description, color, self.clock.now());
        self.projects = appended(&self.projects, project.clone());
        self.selected_project.select(project.id);
        self.open_surface = None;
        self.bump();
        tracing::info!("Creating project: {} (id: {})", project.name, project.id);
        project
    }

    pub fn create_sprint(&mut self, fields: NewSprint) -> Sprint {
        let sprint = Sprint::new(fields);
        self.sprints = appended(&self.sprints, sprint.clone());
        self.selected_sprint.select(sprint.id);
        self.open_surface = None;
        self.bump();
        tracing::info!(
            "Creating sprint: {} (id: {}, project: {})",
            sprint.name,
            sprint.id,
            sprint.project_id
        );
        sprint
    }

    pub fn create_task(&mut self, fields: NewTask) -> Task {
        let task = Task::new(fields, self.clock.now());
        self.tasks = appended(&self.tasks, task.clone());
        self.open_surface = None;
        self.bump();
        tracing::info!(
            "Creating task: {} (id: {}, sprint: {})",
            task.title,
            task.id,
            task.sprint_id
        );
        task
    }

    // Submission from the creation surfaces

    pub fn submit_project(&mut self, draft: ProjectDraft) -> KanbanResult<Project> {
        draft.validate()?;
        Ok(self.create_project(draft.name, draft.description, draft.color))
    }

    /// Create a sprint under the selected project.
    pub fn submit_sprint(&mut self, draft: SprintDraft) -> KanbanResult<Sprint> {
        let project_id = self
            .selected_project_id()
            .ok_or_else(|| KanbanError::Validation("No project selected".to_string()))?;
        let fields = draft.into_new_sprint(project_id)?;
        Ok(self.create_sprint(fields))
    }

    /// Create a task in the selected sprint and project.
    pub fn submit_task(&mut self, draft: TaskDraft) -> KanbanResult<Task> {
        let (project_id, sprint_id) = self
            .selected_project_id()
            .zip(self.selected_sprint_id())
            .ok_or_else(|| KanbanError::Validation("No sprint selected".to_string()))?;
        let fields = draft.into_new_task(sprint_id, project_id)?;
        Ok(self.create_task(fields))
    }

    // Status transition

    /// Move a task to another column. Unknown ids are ignored.
    pub fn update_task_status(&mut self, task_id: TaskId, status: TaskStatus) {
        let Some(current) = self.task(task_id) else {
            tracing::debug!("Ignoring status change for unknown task {}", task_id);
            return;
        };
        let previous_status = current.status;
        let updated_at = now_after(self.clock.as_ref(), current.updated_at);

        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == task_id {
                    task.with_status(status, updated_at)
                } else {
                    task.clone()
                }
            })
            .collect();
        self.tasks = Arc::new(tasks);
        self.bump();
        tracing::debug!(
            "Task {} moved from {} to {}",
            task_id,
            previous_status,
            status
        );
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

fn appended<T: Clone>(items: &Arc<Vec<T>>, item: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item);
    Arc::new(next)
}
