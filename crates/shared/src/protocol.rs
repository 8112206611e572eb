use serde::{Deserialize, Serialize};

/// `Accept` header value sent with every contact submission.
pub const CONTACT_ACCEPT: &str = "application/json";

/// Contact form payload, posted form-encoded to the forms endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
