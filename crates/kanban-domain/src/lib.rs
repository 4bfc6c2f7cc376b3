pub mod column;
pub mod drag;
pub mod filter;
pub mod forms;
pub mod project;
pub mod seed;
pub mod snapshot;
pub mod sprint;
pub mod store;
pub mod tag;
pub mod task;

pub use column::{KanbanColumn, BOARD_COLUMNS};
pub use drag::{DragController, DragOutcome};
pub use forms::{InputSurface, ProjectDraft, SprintDraft, TaskDraft};
pub use project::{Project, ProjectId};
pub use snapshot::Snapshot;
pub use sprint::{NewSprint, Sprint, SprintId, SprintStatus};
pub use store::{BoardSettings, BoardStore};
pub use tag::Tags;
pub use task::{NewTask, PriorityIcon, Task, TaskId, TaskPriority, TaskStatus};
