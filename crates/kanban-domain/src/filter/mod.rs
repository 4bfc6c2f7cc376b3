//! Visible-subset derivations.
//!
//! Filters are recomputed from the current collections on every call; the
//! inputs are small and each store version is immutable, so nothing is
//! cached.

pub mod sprint_filter;
pub mod task_filter;

pub use sprint_filter::{visible_sprints, ProjectFilter, SprintFilter};
pub use task_filter::{
    column_counts, tasks_in_column, visible_tasks, SprintTaskFilter, StatusFilter, TaskFilter,
};
