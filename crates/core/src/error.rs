use crate::validation::rules::ErrorSet;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(ErrorSet),

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl From<ErrorSet> for CoreError {
    fn from(errors: ErrorSet) -> Self {
        CoreError::Validation(errors)
    }
}
