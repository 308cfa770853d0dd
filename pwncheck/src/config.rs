use std::time::Duration;

pub const DEFAULT_MIN_PASSWORD_LENGTH: u16 = 6;
pub const DEFAULT_BREACH_LIMIT: u32 = 10;
pub const DEFAULT_MAX_RETRY_ATTEMPTS: u8 = 3;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Parameters for a [`Checker`](crate::Checker).
///
/// Numeric and duration fields left at zero take the documented default at
/// construction, so `..Config::default()` fills in everything but the
/// required `user_agent`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Minimum length of a password to be checked.
    ///
    /// default: 6
    pub min_password_length: u16,

    /// The max number of times a password is found in data breaches before
    /// becoming invalid (or returning an error with `validate`).
    ///
    /// default: 10
    pub breach_limit: u32,

    /// Maximum number of retries after a failed request before giving up.
    /// Retries use exponential backoff.
    ///
    /// default: 3
    pub max_retry_attempts: u8,

    /// Sent as the user-agent request header, typically the name of the app
    /// consuming the service. The remote service answers 403 without one.
    ///
    /// required
    pub user_agent: String,

    /// Sent as the hibp-api-key header when set. The range endpoint does not
    /// require authorization today; this future-proofs callers that hold a
    /// key in case the policy changes.
    pub api_key: Option<String>,

    /// Ask the server to pad responses with dummy zero-count entries so the
    /// response size does not leak how common the queried range is.
    pub add_padding: bool,

    /// Per-request timeout applied to the shared HTTP client.
    ///
    /// default: 30s
    pub request_timeout: Duration,

    /// Delay before the first retry; doubles on each subsequent retry.
    ///
    /// default: 500ms
    pub initial_backoff: Duration,

    /// Cap on the retry delay.
    ///
    /// default: 8s
    pub max_backoff: Duration,
}

impl Config {
    /// Replace unset (zero) fields with their defaults.
    pub(crate) fn with_defaults(mut self) -> Self {
        if self.min_password_length == 0 {
            self.min_password_length = DEFAULT_MIN_PASSWORD_LENGTH;
        }
        if self.breach_limit == 0 {
            self.breach_limit = DEFAULT_BREACH_LIMIT;
        }
        if self.max_retry_attempts == 0 {
            self.max_retry_attempts = DEFAULT_MAX_RETRY_ATTEMPTS;
        }
        if self.request_timeout.is_zero() {
            self.request_timeout = DEFAULT_REQUEST_TIMEOUT;
        }
        if self.initial_backoff.is_zero() {
            self.initial_backoff = DEFAULT_INITIAL_BACKOFF;
        }
        if self.max_backoff.is_zero() {
            self.max_backoff = DEFAULT_MAX_BACKOFF;
        }
        self
    }
}
