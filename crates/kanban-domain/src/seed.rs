//! Sample board shown on first start.

use chrono::Duration;

use crate::store::BoardStore;

const SAMPLE_SPRINT_DAYS: i64 = 14;
use crate::{NewSprint, NewTask, SprintStatus, Tags, TaskPriority, TaskStatus};

struct SampleTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    assignee: Option<&'static str>,
    story_points: u32,
    tags: [&'static str; 2],
}

const SAMPLE_TASKS: [SampleTask; 4] = [
    SampleTask {
        title: "Set up project structure",
        description: "Initialize the project with proper folder structure and configuration",
        status: TaskStatus::Done,
        priority: TaskPriority::High,
        assignee: Some("John Doe"),
        story_points: 3,
        tags: ["setup", "infrastructure"],
    },
    SampleTask {
        title: "Design database schema",
        description: "Create the database schema for the application",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee: Some("Jane Smith"),
        story_points: 5,
        tags: ["database", "design"],
    },
    SampleTask {
        title: "Implement user authentication",
        description: "Add login and registration functionality",
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        assignee: None,
        story_points: 8,
        tags: ["auth", "security"],
    },
    SampleTask {
        title: "Create responsive UI components",
        description: "Build reusable UI components for the application",
        status: TaskStatus::Review,
        priority: TaskPriority::Medium,
        assignee: Some("Mike Johnson"),
        story_points: 13,
        tags: ["ui", "components"],
    },
];

/// Add two projects, two sprints in the first project and four tasks in the
/// first sprint, then select the first project and sprint.
pub fn seed_sample_data(store: &mut BoardStore) {
    let platform = store.create_project(
        "E-commerce Platform".to_string(),
        "Building a modern e-commerce platform".to_string(),
        "#3b82f6".to_string(),
    );
    store.create_project(
        "Mobile App".to_string(),
        "Cross-platform mobile application".to_string(),
        "#10b981".to_string(),
    );

    let today = store.today();
    let sprint_length = Duration::days(SAMPLE_SPRINT_DAYS);

    let foundation = store.create_sprint(NewSprint {
        name: "Sprint 1: Foundation".to_string(),
        description: "Setting up the basic infrastructure".to_string(),
        goal: "Establish project foundation and core features".to_string(),
        project_id: platform.id,
        start_date: today,
        end_date: today + sprint_length,
        status: SprintStatus::Active,
    });
    store.create_sprint(NewSprint {
        name: "Sprint 2: Core Features".to_string(),
        description: "Implementing main application features".to_string(),
        goal: "Complete core functionality".to_string(),
        project_id: platform.id,
        start_date: today + sprint_length,
        end_date: today + sprint_length * 2,
        status: SprintStatus::Planning,
    });

    for sample in &SAMPLE_TASKS {
        store.create_task(NewTask {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            status: sample.status,
            priority: sample.priority,
            sprint_id: foundation.id,
            project_id: platform.id,
            assignee: sample.assignee.map(str::to_string),
            story_points: Some(sample.story_points),
            tags: sample.tags.iter().copied().collect::<Tags>(),
        });
    }

    store.select_project(platform.id);
    store.select_sprint(foundation.id);
    tracing::debug!("Seeded sample board");
}
