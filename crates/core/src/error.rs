use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
}

impl CoreError {
    /// Shorthand for the not-found signal raised by the dog service.
    pub fn dog_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Dog",
            id: id.into(),
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
