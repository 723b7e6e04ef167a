//! Human-readable text sink

use super::options::SinkOptions;
use super::writer::SharedWriter;
use crate::core::{Attr, Context, Entry, FieldValue, Level, Result, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use std::sync::Arc;

/// Writes `time LEVEL file msg key=value ...`, one entry per line.
#[derive(Debug, Clone)]
pub struct TextSink {
    writer: SharedWriter,
    options: SinkOptions,
    use_colors: bool,
    /// Rendered `key=value` pairs attached with `with_attrs`
    scoped: Vec<String>,
    prefix: String,
}

impl TextSink {
    pub fn new(writer: SharedWriter, options: SinkOptions) -> Self {
        Self {
            writer,
            options,
            use_colors: false,
            scoped: Vec::new(),
            prefix: String::new(),
        }
    }

    /// Colour the level label (only with the `console` feature).
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Escape line breaks so a message cannot forge extra log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn level_label(&self, level: Level) -> String {
        let label = format!("{:5}", level.as_str());
        if self.use_colors {
            return colorize(label, level);
        }
        label
    }

    fn render_pair(prefix: &str, attr: &Attr) -> String {
        let value = match &attr.value {
            FieldValue::String(s) if s.is_empty() || s.contains(char::is_whitespace) => {
                format!("{:?}", s)
            }
            other => other.to_string(),
        };
        format!("{}{}={}", prefix, attr.key, value)
    }

    fn format(&self, entry: &Entry) -> String {
        let mut line = format!(
            "{} {}",
            self.options.timestamp_format.format(&entry.time),
            self.level_label(entry.level)
        );
        if self.options.add_source {
            if let Some(source) = &entry.source {
                line.push(' ');
                line.push_str(&self.options.source_format.render(source));
            }
        }
        line.push(' ');
        line.push_str(&Self::sanitize_message(&entry.message));

        for pair in &self.scoped {
            line.push(' ');
            line.push_str(pair);
        }
        for attr in entry.attrs() {
            line.push(' ');
            line.push_str(&Self::render_pair(&self.prefix, attr));
        }
        line
    }
}

#[cfg(feature = "console")]
fn colorize(label: String, level: Level) -> String {
    label.color(level.color_code()).to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(label: String, _level: Level) -> String {
    label
}

impl Sink for TextSink {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.options.min_level
    }

    fn handle(&self, _ctx: &Context, entry: &Entry) -> Result<()> {
        let mut line = self.format(entry);
        line.push('\n');
        self.writer.write_line(line.as_bytes())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        let mut sink = self.clone();
        sink.scoped
            .extend(attrs.iter().map(|attr| Self::render_pair(&self.prefix, attr)));
        Arc::new(sink)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        let mut sink = self.clone();
        if !name.is_empty() {
            sink.prefix = format!("{}{}.", self.prefix, name);
        }
        Arc::new(sink)
    }

    fn name(&self) -> &str {
        "text"
    }
}
