//! Flat `key=value` property store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use seedrun_core::errors::{ConfigError, ErrorInfo};
use tracing::{debug, warn};

/// Characters that split a line into key and value; the first one found wins.
pub const SEPARATORS: [char; 2] = ['=', ':'];

/// Characters that mark a line as a comment when they lead it.
pub const COMMENT_MARKERS: [char; 2] = ['#', '!'];

/// Read-only mapping from property keys to raw string values.
///
/// A store is built exactly once by [`PropertyStore::load`] or
/// [`PropertyStore::parse`] and exposes no way to mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyStore {
    entries: BTreeMap<String, String>,
    source: Option<PathBuf>,
    overridden: usize,
}

impl PropertyStore {
    /// Reads and parses the property file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            ConfigError::FileNotFound(
                ErrorInfo::new(
                    "config.file_not_found",
                    "configuration file does not exist or is unreadable",
                )
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
            )
        })?;
        let mut store = Self::parse(&text).map_err(|err| with_path(err, path))?;
        store.source = Some(path.to_path_buf());
        debug!(path = %path.display(), entries = store.len(), "loaded property file");
        Ok(store)
    }

    /// Parses property text. Duplicate keys keep their last value.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        let mut overridden = 0;
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKERS) {
                continue;
            }
            let (key, value) = split_line(line, line_no)?;
            if entries.insert(key.to_string(), value.to_string()).is_some() {
                overridden += 1;
                warn!(key, line = line_no, "duplicate property key, last value wins");
            }
        }
        Ok(Self {
            entries,
            source: None,
            overridden,
        })
    }

    /// Returns the value bound to `key`.
    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        self.entries.get(key).map(String::as_str).ok_or_else(|| {
            let mut info = ErrorInfo::new("config.missing_key", "required property is absent")
                .with_context("key", key)
                .with_hint(format!("add a `{key}=<value>` line"));
            if let Some(source) = &self.source {
                info = info.with_context("path", source.display().to_string());
            }
            ConfigError::MissingKey(info)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Path the store was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of entries replaced by a later duplicate key.
    pub fn overridden(&self) -> usize {
        self.overridden
    }
}

fn split_line(line: &str, line_no: usize) -> Result<(&str, &str), ConfigError> {
    let malformed = |message: &str| {
        ConfigError::Parse(
            ErrorInfo::new("config.parse", message)
                .with_context("line", line_no.to_string())
                .with_context("content", line)
                .with_hint("expected `key=value`"),
        )
    };
    let Some(at) = line.find(SEPARATORS) else {
        return Err(malformed("line has no key/value separator"));
    };
    let key = line[..at].trim();
    let value = line[at + 1..].trim();
    if key.is_empty() {
        return Err(malformed("line has an empty key"));
    }
    Ok((key, value))
}

fn with_path(err: ConfigError, path: &Path) -> ConfigError {
    match err {
        ConfigError::Parse(info) => {
            ConfigError::Parse(info.with_context("path", path.display().to_string()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator() {
        let store = PropertyStore::parse("url = http://host:80/a=b\n").unwrap();
        assert_eq!(store.get("url").unwrap(), "http://host:80/a=b");
    }

    #[test]
    fn colon_separator_is_accepted() {
        let store = PropertyStore::parse("runs: 4").unwrap();
        assert_eq!(store.get("runs").unwrap(), "4");
    }

    #[test]
    fn empty_value_is_kept() {
        let store = PropertyStore::parse("notes=").unwrap();
        assert_eq!(store.get("notes").unwrap(), "");
    }

    #[test]
    fn bang_comments_are_skipped() {
        let store = PropertyStore::parse("! legacy comment\n  # indented\nruns=1").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = PropertyStore::parse("runs=1\n=5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));
    }

    #[test]
    fn duplicates_are_counted() {
        let store = PropertyStore::parse("runs=3\nruns=4\nruns=5").unwrap();
        assert_eq!(store.get("runs").unwrap(), "5");
        assert_eq!(store.overridden(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn parsed_store_has_no_source() {
        let store = PropertyStore::parse("").unwrap();
        assert!(store.is_empty());
        assert!(store.source().is_none());
    }
}
