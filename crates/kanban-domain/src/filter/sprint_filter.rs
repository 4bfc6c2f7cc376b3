use crate::{ProjectId, Sprint};

pub trait SprintFilter {
    fn matches(&self, sprint: &Sprint) -> bool;
}

/// Sprints owned by one project.
pub struct ProjectFilter {
    project_id: ProjectId,
}

impl ProjectFilter {
    pub fn new(project_id: ProjectId) -> Self {
        Self { project_id }
    }
}

impl SprintFilter for ProjectFilter {
    fn matches(&self, sprint: &Sprint) -> bool {
        sprint.belongs_to(self.project_id)
    }
}

/// Sprints of a project, in insertion order.
pub fn visible_sprints(sprints: &[Sprint], project_id: ProjectId) -> Vec<&Sprint> {
    let filter = ProjectFilter::new(project_id);
    sprints.iter().filter(|s| filter.matches(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewSprint, SprintStatus};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sprint(name: &str, project_id: ProjectId) -> Sprint {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Sprint::new(NewSprint {
            name: name.to_string(),
            description: String::new(),
            goal: "goal".to_string(),
            project_id,
            start_date: day,
            end_date: day,
            status: SprintStatus::Planning,
        })
    }

    #[test]
    fn test_visible_sprints_keeps_insertion_order() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let sprints = vec![sprint("a", p1), sprint("b", p2), sprint("c", p1)];

        let names: Vec<&str> = visible_sprints(&sprints, p1)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_orphaned_sprint_never_matches() {
        let sprints = vec![sprint("orphan", Uuid::new_v4())];
        assert!(visible_sprints(&sprints, Uuid::new_v4()).is_empty());
    }
}
