use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KanbanError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }
}
