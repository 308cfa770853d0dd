use std::io::BufRead;

use crate::error::{Error, Result};

/// Scan decoded `SUFFIX:COUNT` lines for the given match key and return its
/// breach count, or 0 when no line matches.
///
/// Lines that do not split into exactly two fields are skipped; the server
/// guarantees suffixes are unique per response, so the first match wins. A
/// count that fails to parse on the matched line is fatal.
pub(crate) fn breach_count<R: BufRead>(reader: R, match_key: &str) -> Result<u32> {
    for line in reader.lines() {
        let line = line.map_err(Error::Decode)?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(':');
        let (suffix, count_text) = match (fields.next(), fields.next(), fields.next()) {
            (Some(suffix), Some(count_text), None) => (suffix, count_text),
            _ => continue,
        };
        if suffix == match_key {
            return count_text.parse::<u32>().map_err(|source| Error::ParseCount {
                value: count_text.to_owned(),
                source,
            });
        }
    }
    Ok(0)
}
