//! Raw entries handed to sinks and the normalized record handed to hooks

use super::level::Level;
use super::value::{Attr, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;

/// Call site a record is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
}

impl Source {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// `basename:line`
    pub fn short(&self) -> String {
        let base = Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file);
        format!("{}:{}", base, self.line)
    }

    /// `path:line` as recorded by the compiler
    pub fn full(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl From<&'static Location<'static>> for Source {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// A log event as built by the logger, before normalization.
///
/// Attributes keep call order and may repeat keys.
#[derive(Debug, Clone)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub source: Option<Source>,
    attrs: Vec<Attr>,
}

impl Entry {
    pub fn new(
        time: DateTime<Utc>,
        level: Level,
        message: impl Into<String>,
        source: Option<Source>,
    ) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            source,
            attrs: Vec::new(),
        }
    }

    pub fn add(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    pub fn add_all(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}

/// Normalized log event delivered to event hooks.
///
/// Unlike [`Entry`] it owns a plain key/value map, so it can be stored,
/// serialized or shipped elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub message: String,
    pub level: Level,
    pub attributes: HashMap<String, FieldValue>,
}

impl Record {
    /// Build a record from its raw parts; duplicate keys keep the last value.
    pub fn normalize(
        level: Level,
        message: &str,
        time: DateTime<Utc>,
        attrs: &[Attr],
    ) -> Self {
        let mut attributes = HashMap::with_capacity(attrs.len());
        for attr in attrs {
            attributes.insert(attr.key.clone(), attr.value.clone());
        }

        Self {
            time,
            message: message.to_string(),
            level,
            attributes,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&FieldValue> {
        self.attributes.get(key)
    }
}

impl From<&Entry> for Record {
    fn from(entry: &Entry) -> Self {
        Record::normalize(entry.level, &entry.message, entry.time, entry.attrs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_short_uses_basename() {
        let source = Source::new("src/bin/sales.rs", 42);
        assert_eq!(source.short(), "sales.rs:42");
        assert_eq!(source.full(), "src/bin/sales.rs:42");
    }

    #[test]
    fn test_source_caller_points_here() {
        let expected = line!() + 1;
        let source = Source::caller();
        assert_eq!(source.line, expected);
        assert!(source.short().starts_with("record.rs:"));
    }

    #[test]
    fn test_normalize_captures_every_attr() {
        let now = Utc::now();
        let attrs = vec![Attr::new("user", "alice"), Attr::new("attempt", 3)];
        let record = Record::normalize(Level::Warn, "retrying", now, &attrs);

        assert_eq!(record.level, Level::Warn);
        assert_eq!(record.message, "retrying");
        assert_eq!(record.time, now);
        assert_eq!(record.attributes.len(), 2);
        assert_eq!(record.attribute("attempt"), Some(&FieldValue::Int(3)));
    }

    #[test]
    fn test_normalize_duplicate_keys_last_wins() {
        let attrs = vec![Attr::new("k", "first"), Attr::new("k", "second")];
        let record = Record::normalize(Level::Info, "dup", Utc::now(), &attrs);

        assert_eq!(record.attributes.len(), 1);
        assert_eq!(record.attribute("k"), Some(&FieldValue::from("second")));
    }

    #[test]
    fn test_from_entry() {
        let mut entry = Entry::new(Utc::now(), Level::Error, "boom", None);
        entry.add(Attr::new("code", 500));
        entry.add_all(vec![Attr::new("retry", false)]);

        let record = Record::from(&entry);
        assert_eq!(entry.num_attrs(), 2);
        assert_eq!(record.level, Level::Error);
        assert_eq!(record.attribute("code"), Some(&FieldValue::Int(500)));
        assert_eq!(record.attribute("retry"), Some(&FieldValue::Bool(false)));
    }
}
