//! Options shared by the formatting sinks

use crate::core::{Level, Source, TimestampFormat};

/// How the call site is rendered under the `file` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// `main.rs:12`
    #[default]
    Basename,
    /// `src/bin/main.rs:12`
    FullPath,
}

impl SourceFormat {
    pub fn render(&self, source: &Source) -> String {
        match self {
            SourceFormat::Basename => source.short(),
            SourceFormat::FullPath => source.full(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SinkOptions {
    pub min_level: Level,
    pub add_source: bool,
    pub source_format: SourceFormat,
    pub timestamp_format: TimestampFormat,
}

impl SinkOptions {
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source_format: SourceFormat) -> Self {
        self.add_source = true;
        self.source_format = source_format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            add_source: false,
            source_format: SourceFormat::Basename,
            timestamp_format: TimestampFormat::default(),
        }
    }
}
