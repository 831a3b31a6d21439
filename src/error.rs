use thiserror::Error;

/// Failure of a single [`crate::api::Api`] operation.
///
/// Every variant has already been written to the logger by the time it is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("missing setting: {name}")]
    MissingSetting { name: String },
    #[error("invalid setting {name}: {value:?}")]
    InvalidSetting { name: String, value: String },
    #[error("{url} - request failed: {message}")]
    Transport { url: String, message: String },
    #[error("responseCode: {status}. {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("{url} - invalid JSON response: {message}")]
    MalformedBody { url: String, message: String },
    #[error("{url} - Error parsing JSON response: no access_token found")]
    MissingAccessToken { url: String },
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
