use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Invalid value for attribute '{key}': {reason}")]
    InvalidAttribute { key: String, reason: String },

    #[error("Tag {0} is already assigned")]
    AlreadyAssigned(String),

    #[error("Tag {0} is not assigned")]
    NotAssigned(String),

    #[error("Tag id must not be empty")]
    EmptyId,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Script error on line {line}: {reason}")]
    Script { line: usize, reason: String },
}

impl TagError {
    pub fn invalid_attribute(key: impl Into<String>, reason: impl Into<String>) -> Self {
        TagError::InvalidAttribute {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a caller handing the widget a bad value.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, TagError::InvalidAttribute { .. } | TagError::EmptyId)
    }

    /// True for operations rejected because they would break the pool/assigned partition.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            TagError::AlreadyAssigned(_) | TagError::NotAssigned(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
