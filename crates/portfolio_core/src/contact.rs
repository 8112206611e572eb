//! Contact form state and delivery to the third-party forms endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use shared::{
    error::ContactError,
    protocol::{FormSubmission, CONTACT_ACCEPT},
};
use tracing::{info, warn};
use url::Url;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Blocking notice shown to the user once a submission attempt finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(err: &ContactError) -> Self {
        let message = match err {
            ContactError::Validation(reason) => format!("Please check the form: {reason}."),
            _ => FAILURE_MESSAGE.to_string(),
        };
        Self {
            kind: NotificationKind::Failure,
            message,
        }
    }
}

/// Editable contact form fields plus the advisory busy flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    busy: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Packages the fields as entered and marks the form busy. Invalid input
    /// or an in-flight submission leaves the form untouched.
    pub fn begin_submit(&mut self) -> Result<FormSubmission, ContactError> {
        if self.busy {
            return Err(ContactError::Busy);
        }
        let submission = FormSubmission::new(&self.name, &self.email, &self.message);
        validate_submission(&submission)?;

        self.busy = true;
        info!("contact submission started");
        Ok(submission)
    }

    /// Settles an attempt. Clears the fields only on success; the busy flag is
    /// always released.
    pub fn finish_submit(&mut self, outcome: &Result<(), ContactError>) -> Notification {
        self.busy = false;
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                info!("contact submission delivered");
                Notification::success()
            }
            Err(err) => {
                warn!(error = %err, "contact submission failed");
                Notification::failure(err)
            }
        }
    }

    /// Releases the busy flag without touching the fields, for attempts that
    /// never reached the network layer.
    pub fn abandon_submit(&mut self) {
        self.busy = false;
    }
}

pub fn validate_submission(submission: &FormSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::validation("name is required"));
    }
    if submission.email.trim().is_empty() {
        return Err(ContactError::validation("email is required"));
    }
    if !looks_like_email(submission.email.trim()) {
        return Err(ContactError::validation("email address is malformed"));
    }
    if submission.message.trim().is_empty() {
        return Err(ContactError::validation("message is required"));
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, submission: &FormSubmission) -> Result<(), ContactError>;
}

/// Posts submissions form-encoded to a fixed forms endpoint. One attempt per
/// call; no retry.
#[derive(Debug, Clone)]
pub struct HttpContactSender {
    client: Client,
    endpoint: Url,
}

impl HttpContactSender {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ContactError::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSender for HttpContactSender {
    async fn send(&self, submission: &FormSubmission) -> Result<(), ContactError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, CONTACT_ACCEPT)
            .form(submission)
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(
                status = status.as_u16(),
                endpoint = %self.endpoint,
                "forms endpoint accepted submission"
            );
            Ok(())
        } else {
            warn!(
                status = status.as_u16(),
                endpoint = %self.endpoint,
                "forms endpoint rejected submission"
            );
            Err(ContactError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
