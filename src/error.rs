use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactBookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("invalid phone number: '{value}' (expected 9-15 digits, optionally prefixed with + or +1)")]
    InvalidPhone { value: String },

    #[error("invalid email address: '{value}'")]
    InvalidEmail { value: String },

    #[error("no contact at position {index} (the book holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactBookError {
    /// True for errors the interactive caller can fix by re-entering the
    /// offending value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactBookError::BlankField { .. }
                | ContactBookError::InvalidPhone { .. }
                | ContactBookError::InvalidEmail { .. }
        )
    }
}

pub type ContactBookResult<T> = Result<T, ContactBookError>;
