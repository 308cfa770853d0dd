//! Password breach checking backed by the haveibeenpwned database.
//!
//! Passwords are never sent anywhere: the first five characters of the
//! SHA-1 digest select a range of candidate hashes from the remote service,
//! and the remaining 35 characters are matched locally.
//!
//! https://haveibeenpwned.com/API/v3#SearchingPwnedPasswordsByRange

mod checker;
mod config;
mod decode;
mod error;
mod keys;
mod range;
mod scan;
mod strength;

pub use checker::{Checker, Evaluation};
pub use config::{
    Config, DEFAULT_BREACH_LIMIT, DEFAULT_MAX_RETRY_ATTEMPTS, DEFAULT_MIN_PASSWORD_LENGTH,
};
pub use error::{Error, Result};
pub use strength::strength_score;

pub use tokio_util::sync::CancellationToken;
