use crate::config::RequestConfigError;

/// Error delivered to a completion handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with one of the reported failure statuses
    /// (404, 403, 500), or any other status when the requester reports
    /// unhandled statuses.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body of a 200 response was not valid JSON.
    #[error("{0}")]
    Decode(String),

    /// The request never produced a response. Only delivered when the
    /// requester reports unhandled outcomes.
    #[error("Network error: {0}")]
    Transport(String),
}

impl RequestError {
    /// Numeric status code, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors raised while setting up a [`Requester`](crate::Requester).
#[derive(Debug, thiserror::Error)]
pub enum RequesterError {
    #[error("no tokio runtime available to spawn requests on")]
    NoRuntime,

    #[error("invalid request config: {0}")]
    Config(#[from] RequestConfigError),

    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_displays_message_verbatim() {
        let e = RequestError::Decode("expected value at line 1 column 1".into());
        assert_eq!(e.to_string(), "expected value at line 1 column 1");
        assert_eq!(e.status(), None);
    }

    #[test]
    fn status_error_exposes_code() {
        let e = RequestError::Status(404);
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.to_string(), "HTTP status 404");
    }
}
