// src/flow/error.rs

use std::time::Duration;
use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during upload. Please check the logs.";
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed";

/// Every way a submission can end without reaching the results view
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// HTML reply carrying an auth signal (401/403 or a login redirect)
    #[error("Session expired")]
    SessionExpired,

    /// HTML reply without an auth signal
    #[error("Received non-JSON response from server (status {status})")]
    ProtocolViolation { status: u16 },

    /// JSON reply with a failure status
    #[error("Upload rejected with status {status}: {message}")]
    Application { status: u16, message: String },

    #[error("Upload request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Upload request failed: {0:#}")]
    Transport(anyhow::Error),

    #[error("Invalid analysis payload: {0:#}")]
    InvalidPayload(anyhow::Error),

    #[error("Failed to hand off analysis: {0:#}")]
    Handoff(anyhow::Error),
}

impl SubmissionError {
    /// Text for the user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            SubmissionError::Application { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
