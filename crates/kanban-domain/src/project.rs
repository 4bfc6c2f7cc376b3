use chrono::{DateTime, Utc};
use kanban_core::Identifiable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = Uuid;

pub const DEFAULT_PROJECT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: String, color: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            color,
            created_at: now,
        }
    }
}

impl Identifiable for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_gets_fresh_id() {
        let now = Utc::now();
        let a = Project::new("A".to_string(), String::new(), "#fff".to_string(), now);
        let b = Project::new("A".to_string(), String::new(), "#fff".to_string(), now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, now);
    }
}
