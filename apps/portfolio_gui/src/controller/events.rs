//! UI/backend events and error modeling for the portfolio controller.

use shared::error::{ContactError, ErrorCode};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    ContactDelivered,
    ContactFailed(ContactError),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Rejected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ContactSubmit,
    Clipboard,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Rejected => "Rejected",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
            || message_lower.contains("required")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("rejected")
            || message_lower.contains("status 4")
            || message_lower.contains("status 5")
        {
            UiErrorCategory::Rejected
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_contact_error(err: &ContactError) -> Self {
        let category = match err.code() {
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::Transport => UiErrorCategory::Transport,
            ErrorCode::Rejected => UiErrorCategory::Rejected,
            ErrorCode::Busy => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context: UiErrorContext::ContactSubmit,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_text(&self) -> String {
        format!("{} error: {}", err_label(self.category), self.message)
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
