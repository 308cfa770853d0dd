use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while checking a password.
///
/// Policy failures carry their typed context (`MinLength`, `BreachLimit`) so
/// callers can match on them instead of parsing messages.
#[derive(Error, Debug)]
pub enum Error {
    /// A user agent is required both at construction and by the remote
    /// service, which answers 403 without one.
    #[error("UserAgent was not specified")]
    MissingUserAgent,

    #[error("minimum password length {required} not satisfied, got {actual}")]
    MinLength { required: u16, actual: u16 },

    #[error("password breach limit exceeded: found in {count} data breaches")]
    BreachLimit { count: u32 },

    #[error("unauthorized request: no API key was provided or the key was invalid")]
    Unauthorized,

    #[error("too many requests: the rate limit has been exceeded")]
    TooManyRequests,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("malformed request")]
    MalformedRequest,

    #[error("request not successful: received status {0}")]
    UnexpectedStatus(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] std::io::Error),

    #[error("malformed breach count {value:?}: {source}")]
    ParseCount {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("evaluation cancelled")]
    Cancelled,
}

impl Error {
    /// Whether the range client may try again after this failure.
    ///
    /// Network-level errors and transient statuses qualify, including a
    /// malformed request (400).
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::MalformedRequest | Error::UnexpectedStatus(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_errors_keep_their_context() {
        match (Error::MinLength { required: 7, actual: 4 }) {
            Error::MinLength { required, actual } => {
                assert_eq!(required, 7);
                assert_eq!(actual, 4);
            }
            _ => unreachable!(),
        }
        let err = Error::BreachLimit { count: 52_579 };
        assert_eq!(
            err.to_string(),
            "password breach limit exceeded: found in 52579 data breaches"
        );
    }

    #[test]
    fn terminal_statuses_are_not_retryable() {
        assert!(!Error::Unauthorized.is_retryable());
        assert!(!Error::MissingUserAgent.is_retryable());
        assert!(!Error::TooManyRequests.is_retryable());
        assert!(!Error::ServiceUnavailable.is_retryable());
        assert!(!Error::Cancelled.is_retryable());
    }

    #[test]
    fn transient_failures_are_retryable() {
        assert!(Error::MalformedRequest.is_retryable());
        assert!(Error::UnexpectedStatus(404).is_retryable());
        assert!(Error::UnexpectedStatus(500).is_retryable());
    }
}
