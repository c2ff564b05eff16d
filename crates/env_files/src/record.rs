//! Key/value records and their file encoding.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::delimiter::{DelimiterSource, DELIMITER_PREFIX};
use crate::error::EnvFileError;

const DISALLOWED_KEYS: [&str; 2] = ["CI", "NODE_OPTIONS"];
const RESERVED_PREFIXES: [&str; 2] = ["GITHUB_", "RUNNER_"];

/// A validated, pending write to an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueRecord {
    key: String,
    value: String,
}

impl KeyValueRecord {
    /// Trim `key` and `value` and reject either being empty.
    pub fn new(key: &str, value: &str) -> Result<Self, EnvFileError> {
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() {
            return Err(EnvFileError::EmptyKey);
        }
        if value.is_empty() {
            return Err(EnvFileError::EmptyValue);
        }
        if key.contains(['=', '\n', '\r', '\0']) || key.contains("<<") {
            return Err(EnvFileError::InvalidKey {
                key: key.to_owned(),
            });
        }
        if value.contains('\0') {
            return Err(EnvFileError::NulInValue);
        }

        Ok(Self {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }

    /// Encode as `KEY=value\n`, or for multiline values as
    /// `KEY<<DELIM\nvalue\nDELIM\n` with a freshly drawn delimiter.
    pub fn encode(&self, delimiters: &mut impl DelimiterSource) -> String {
        if self.is_multiline() {
            let delimiter = format!("{DELIMITER_PREFIX}{}", delimiters.next_token());
            format!("{}<<{delimiter}\n{}\n{delimiter}\n", self.key, self.value)
        } else {
            format!("{}={}\n", self.key, self.value)
        }
    }
}

/// Reject keys the runner reserves for itself: `CI`, `NODE_OPTIONS`, and
/// anything starting with `GITHUB_` or `RUNNER_`.
pub fn ensure_env_key_allowed(key: &str) -> Result<(), EnvFileError> {
    let disallowed = DISALLOWED_KEYS.contains(&key)
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| key.starts_with(prefix));
    if disallowed {
        return Err(EnvFileError::DisallowedKey {
            key: key.to_owned(),
        });
    }
    Ok(())
}

/// Append `record` to the existing file at `path`.
///
/// The file is never created: the runner owns these files. The encoded record
/// goes out in a single `write_all` so an append-mode descriptor keeps it
/// contiguous for ordinary record sizes.
pub fn append_record(
    path: &Path,
    record: &KeyValueRecord,
    delimiters: &mut impl DelimiterSource,
) -> Result<(), EnvFileError> {
    append_to(path, &record.encode(delimiters))?;
    tracing::debug!(
        key = record.key(),
        path = %path.display(),
        multiline = record.is_multiline(),
        "appended record"
    );
    Ok(())
}

pub(crate) fn append_to(path: &Path, contents: &str) -> Result<(), EnvFileError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| EnvFileError::io("opening file for append", path, source))?;
    file.write_all(contents.as_bytes())
        .map_err(|source| EnvFileError::io("appending to file", path, source))
}
