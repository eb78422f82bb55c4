use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure of the outbound submission request.
///
/// The form treats a connection failure and a non-2xx response identically;
/// the distinction is kept for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitError {
    /// The request never produced an HTTP response: DNS, connect, timeout,
    /// or an unusable endpoint URL.
    Network(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
}

impl SubmitError {
    /// Message shown in the form's error slot. Transport detail goes to the
    /// logs, not the user.
    pub fn user_message(&self) -> &'static str {
        "Your message could not be sent. Please try again."
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(detail) => write!(f, "request failed: {detail}"),
            SubmitError::Status(code) => write!(f, "endpoint returned status {code}"),
        }
    }
}

impl std::error::Error for SubmitError {}
