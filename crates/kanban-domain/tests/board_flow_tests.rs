use chrono::{Duration, TimeZone, Utc};
use kanban_core::{AppConfig, MockClock};
use kanban_domain::filter::tasks_in_column;
use kanban_domain::*;
use uuid::Uuid;

fn stepping_store() -> BoardStore {
    let mut now = Utc.with_ymd_and_hms(2025, 2, 10, 8, 30, 0).unwrap();
    let mut clock = MockClock::new();
    clock.expect_now().returning(move || {
        now += Duration::milliseconds(250);
        now
    });
    BoardStore::with_clock(Box::new(clock))
}

fn sprint_fields(project_id: ProjectId, name: &str) -> NewSprint {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    NewSprint {
        name: name.to_string(),
        description: String::new(),
        goal: "Deliver".to_string(),
        project_id,
        start_date: start,
        end_date: start + Duration::days(14),
        status: SprintStatus::default(),
    }
}

fn task_fields(title: &str, sprint_id: SprintId, project_id: ProjectId) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: String::new(),
        status: TaskStatus::Todo,
        priority: TaskPriority::Low,
        sprint_id,
        project_id,
        assignee: None,
        story_points: None,
        tags: Tags::new(),
    }
}

#[test]
fn test_drag_todo_task_into_in_progress() {
    let mut store = stepping_store();
    let p1 = store.create_project("P1".to_string(), String::new(), "#3b82f6".to_string());
    let s1 = store.create_sprint(sprint_fields(p1.id, "S1"));
    let t1 = store.create_task(task_fields("T1", s1.id, p1.id));

    let mut drag = DragController::new();
    assert!(drag.drag_start(&store, t1.id));
    let outcome = drag.drag_end(&mut store, t1.id, Some("in-progress"));

    assert!(outcome.is_moved());
    assert_eq!(store.tasks().len(), 1);
    let moved = store.task(t1.id).unwrap();
    assert_eq!(moved.status, TaskStatus::InProgress);
    assert!(moved.updated_at > moved.created_at);
}

#[test]
fn test_review_transition_leaves_other_tasks_untouched() {
    let mut store = stepping_store();
    let p1 = store.create_project("P1".to_string(), String::new(), "#fff".to_string());
    let s1 = store.create_sprint(sprint_fields(p1.id, "S1"));
    let ids: Vec<TaskId> = ["a", "b", "c"]
        .iter()
        .map(|title| store.create_task(task_fields(title, s1.id, p1.id)).id)
        .collect();

    for id in &ids {
        let before = store.tasks().to_vec();
        store.update_task_status(*id, TaskStatus::Review);

        for (old, new) in before.iter().zip(store.tasks()) {
            if old.id == *id {
                assert_eq!(new.status, TaskStatus::Review);
                assert!(new.updated_at > old.updated_at);
                assert_eq!(
                    Task {
                        status: old.status,
                        updated_at: old.updated_at,
                        ..new.clone()
                    },
                    *old
                );
            } else {
                assert_eq!(new, old);
            }
        }
    }
}

#[test]
fn test_unknown_task_and_non_column_drops_are_noops() {
    let mut store = stepping_store();
    let p1 = store.create_project("P1".to_string(), String::new(), "#fff".to_string());
    let s1 = store.create_sprint(sprint_fields(p1.id, "S1"));
    let t1 = store.create_task(task_fields("T1", s1.id, p1.id));
    let before = store.tasks().to_vec();

    store.update_task_status(Uuid::new_v4(), TaskStatus::Done);
    assert_eq!(store.tasks(), before.as_slice());

    let mut drag = DragController::new();
    for target in ["Done", "backlog", "blocked", ""] {
        drag.drag_start(&store, t1.id);
        let outcome = drag.drag_end(&mut store, t1.id, Some(target));
        assert!(matches!(outcome, DragOutcome::InvalidTarget(_)));
        assert!(!drag.is_dragging());
    }
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn test_views_follow_selection() {
    let mut store = stepping_store();
    let a = store.create_project("A".to_string(), String::new(), "#fff".to_string());
    let a_sprint = store.create_sprint(sprint_fields(a.id, "A-1"));
    store.create_task(task_fields("a-task", a_sprint.id, a.id));

    let b = store.create_project("B".to_string(), String::new(), "#fff".to_string());
    let b_sprint = store.create_sprint(sprint_fields(b.id, "B-1"));
    store.create_task(task_fields("b-task", b_sprint.id, b.id));

    assert_eq!(store.selected_project_sprints().len(), 1);
    assert_eq!(store.selected_sprint_tasks()[0].title, "b-task");

    store.select_project(a.id);
    assert_eq!(store.selected_sprint_id(), None);
    assert!(store.selected_sprint_tasks().is_empty());
    assert_eq!(store.selected_project_sprints()[0].name, "A-1");

    store.select_sprint(a_sprint.id);
    let visible = store.selected_sprint_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(tasks_in_column(&visible, TaskStatus::Todo).len(), 1);
}

#[test]
fn test_orphaned_references_are_tolerated() {
    let mut store = stepping_store();
    let ghost_project = Uuid::new_v4();
    let orphan = store.create_sprint(sprint_fields(ghost_project, "Orphan"));
    store.create_task(task_fields("lost", Uuid::new_v4(), ghost_project));

    assert_eq!(store.sprints().len(), 1);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.selected_sprint_id(), Some(orphan.id));
    assert!(store.selected_sprint_tasks().is_empty());
    assert!(store.selected_project_sprints().is_empty());
}

#[test]
fn test_form_submission_flow() {
    let mut store = stepping_store();
    assert!(store.show_surface(InputSurface::ProjectForm));
    let project = store
        .submit_project(ProjectDraft {
            name: "Mobile App".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(project.color, "#3b82f6");
    assert_eq!(store.open_surface(), None);

    assert!(store.show_surface(InputSurface::SprintForm));
    let mut sprint_draft = store.sprint_draft();
    sprint_draft.name = "Sprint 1".to_string();
    let err = store.submit_sprint(sprint_draft.clone()).unwrap_err();
    assert!(err.to_string().contains("goal"));
    assert_eq!(store.open_surface(), Some(InputSurface::SprintForm));

    sprint_draft.goal = "Onboarding".to_string();
    let sprint = store.submit_sprint(sprint_draft).unwrap();
    assert_eq!(sprint.status, SprintStatus::Planning);

    assert!(store.show_surface(InputSurface::TaskForm));
    let task = store
        .submit_task(TaskDraft {
            title: "Login screen".to_string(),
            priority: TaskPriority::Urgent,
            story_points: Some(5),
            tags: ["ui", "auth", "ui", "a11y", "mobile"].into_iter().collect(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(task.sprint_id, sprint.id);
    assert_eq!(task.project_id, project.id);
    assert_eq!(task.created_at, task.updated_at);
    assert_eq!(task.priority.icon(), PriorityIcon::AlertCircle);

    let limit = store.settings().tag_display_limit;
    let (shown, hidden) = task.visible_tags(limit);
    assert_eq!(shown, &["ui", "auth", "a11y"]);
    assert_eq!(hidden, 1);
}

#[test]
fn test_from_config_respects_seed_flag() {
    let seeded = BoardStore::from_config(&AppConfig::default());
    assert_eq!(seeded.projects().len(), 2);
    assert!(seeded.selected_sprint().is_some());

    let config = AppConfig::from_toml_str("seed_sample_data = false\ntag_display_limit = 5\n")
        .unwrap();
    let empty = BoardStore::from_config(&config);
    assert!(empty.snapshot().is_empty());
    assert_eq!(empty.settings().tag_display_limit, 5);
}

#[test]
fn test_oversized_sprint_duration_does_not_overflow_dates() {
    let config = AppConfig::from_toml_str("sprint_duration_days = 4000000000").unwrap();
    let store = BoardStore::from_config(&config);

    assert_eq!(store.settings().sprint_duration_days, 365);
    assert!(store.sprints().iter().all(|s| s.duration_days() == 14));

    let draft = store.sprint_draft();
    assert_eq!((draft.end_date - draft.start_date).num_days(), 365);
}

#[test]
fn test_snapshot_survives_creation() {
    let mut store = stepping_store();
    let project = store.create_project("A".to_string(), String::new(), "#fff".to_string());
    let before = store.snapshot();

    let sprint = store.create_sprint(sprint_fields(project.id, "S1"));
    store.create_task(task_fields("T", sprint.id, project.id));

    assert!(before.sprints().is_empty());
    assert!(before.tasks().is_empty());
    assert_eq!(before.selected_sprint_id(), None);

    let after = store.snapshot();
    assert_eq!(after.visible_sprints().len(), 1);
    assert_eq!(after.visible_tasks().len(), 1);
    assert_eq!(after.selected_project().map(|p| p.id), Some(project.id));
}
