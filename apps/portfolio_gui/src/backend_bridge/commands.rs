//! Backend commands queued from UI to backend worker.

use shared::protocol::FormSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    SubmitContact(FormSubmission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitContact(_) => "submit_contact",
        }
    }
}
