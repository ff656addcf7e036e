use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid key '{0}': a name needs at least 2 characters")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Sort error: {0}")]
    Sort(String),
}

impl AssistantError {
    pub fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AssistantError::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by bad user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AssistantError::InvalidValue { .. } | AssistantError::InvalidKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
