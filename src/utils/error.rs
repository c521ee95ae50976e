use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid {field} given. {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed catalogue line {line}: {reason}")]
    Catalogue { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        MatchError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
