use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::range::RangeClient;
use crate::{decode, keys, scan};

/// Outcome of a single password evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub breach_count: u32,
    pub notes: String,
    pub allowed: bool,
}

/// Evaluates passwords against the haveibeenpwned breach corpus.
///
/// One instance owns one HTTP client; calls borrow `&self`, so a single
/// checker can serve concurrent tasks. Threshold fields on [`Config`] are
/// re-read on every call and may be adjusted on a live instance.
#[derive(Debug, Clone)]
pub struct Checker {
    pub config: Config,
    range: RangeClient,
}

impl Checker {
    /// Build a checker, applying defaults for unset config fields.
    ///
    /// Fails with [`Error::MissingUserAgent`] when `user_agent` is empty; no
    /// network access happens here.
    pub fn new(config: Config) -> Result<Self> {
        if config.user_agent.is_empty() {
            return Err(Error::MissingUserAgent);
        }
        let config = config.with_defaults();
        let range = RangeClient::new(&config)?;
        Ok(Self { config, range })
    }

    /// Evaluate a password, checking the breach corpus for occurrences.
    ///
    /// Passwords shorter than the configured minimum fail with
    /// [`Error::MinLength`] before any network call is made.
    pub async fn evaluate(&self, cancel: &CancellationToken, password: &str) -> Result<Evaluation> {
        let length = password.len();
        let required = self.config.min_password_length;
        if length < usize::from(required) {
            // length < required <= u16::MAX, so the cast is lossless
            return Err(Error::MinLength {
                required,
                actual: length as u16,
            });
        }
        let breach_count = self.query_breaches(cancel, password).await?;
        Ok(Evaluation {
            breach_count,
            notes: lookup_notes(breach_count),
            allowed: breach_count < self.config.breach_limit,
        })
    }

    /// Like [`evaluate`](Checker::evaluate) but returns an error when the
    /// breach limit is reached, carrying the observed count.
    pub async fn validate(&self, cancel: &CancellationToken, password: &str) -> Result<()> {
        let evaluation = self.evaluate(cancel, password).await?;
        if evaluation.breach_count >= self.config.breach_limit {
            return Err(Error::BreachLimit {
                count: evaluation.breach_count,
            });
        }
        Ok(())
    }

    async fn query_breaches(&self, cancel: &CancellationToken, password: &str) -> Result<u32> {
        let keys = keys::derive(password);
        let body = self.range.fetch(cancel, &keys.prefix).await?;
        scan::breach_count(decode::decoder(&body), &keys.suffix)
    }
}

fn lookup_notes(breach_count: u32) -> String {
    if breach_count == 0 {
        "not found in any known data breach".to_owned()
    } else {
        format!("found in {} data breaches", breach_count)
    }
}
