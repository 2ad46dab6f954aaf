use thiserror::Error;

use crate::contact::draft::ContactField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CyclerError {
    #[error("phrase cycler needs at least one phrase")]
    NoPhrases,
}

/// Failures of the low-level HTTP client in `utils::api`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

/// Reasons a submission never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("{0} is required")]
    Incomplete(ContactField),
}
