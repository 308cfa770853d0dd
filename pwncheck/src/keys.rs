use data_encoding::HEXUPPER;
use sha1::{Digest, Sha1};

/// Length of the hash prefix sent to the range endpoint. The remaining 35
/// characters never leave the process.
pub(crate) const PREFIX_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HashKeys {
    /// Uppercase hex prefix used as the remote lookup key.
    pub prefix: String,
    /// Uppercase hex remainder, matched against response lines.
    pub suffix: String,
}

/// Hash the exact password bytes and split the digest into query and match
/// keys. Deterministic, never fails.
pub(crate) fn derive(password: &str) -> HashKeys {
    let digest = HEXUPPER.encode(Sha1::digest(password.as_bytes()).as_slice());
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    HashKeys {
        prefix: prefix.to_owned(),
        suffix: suffix.to_owned(),
    }
}
