use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Busy,
    Transport,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("invalid contact form: {0}")]
    Validation(String),
    #[error("a contact submission is already in flight")]
    Busy,
    #[error("network failure while sending contact form: {0}")]
    Transport(String),
    #[error("forms endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

impl ContactError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::Validation(_) => ErrorCode::Validation,
            ContactError::Busy => ErrorCode::Busy,
            ContactError::Transport(_) => ErrorCode::Transport,
            ContactError::Rejected { .. } => ErrorCode::Rejected,
        }
    }
}
