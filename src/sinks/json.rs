//! JSON sink for structured logging
//!
//! Writes each entry as a single-line JSON object (JSONL), keys in the order
//! `time`, `level`, `file`, `msg`, scoped attributes, call attributes.

use super::options::SinkOptions;
use super::writer::SharedWriter;
use crate::core::{Attr, Context, Entry, Level, Result, Sink};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct JsonSink {
    writer: SharedWriter,
    options: SinkOptions,
    /// Attributes attached with `with_attrs`, each with the group path that
    /// was open when it was attached.
    scoped: Vec<(Vec<String>, Attr)>,
    groups: Vec<String>,
}

impl JsonSink {
    pub fn new(writer: SharedWriter, options: SinkOptions) -> Self {
        Self {
            writer,
            options,
            scoped: Vec::new(),
            groups: Vec::new(),
        }
    }

    fn to_object(&self, entry: &Entry) -> Map<String, Value> {
        let mut obj = Map::new();

        obj.insert(
            "time".to_string(),
            self.options.timestamp_format.to_json(&entry.time),
        );
        obj.insert(
            "level".to_string(),
            Value::String(entry.level.as_str().to_string()),
        );
        if self.options.add_source {
            if let Some(source) = &entry.source {
                obj.insert(
                    "file".to_string(),
                    Value::String(self.options.source_format.render(source)),
                );
            }
        }
        obj.insert("msg".to_string(), Value::String(entry.message.clone()));

        for (path, attr) in &self.scoped {
            insert_at(&mut obj, path, attr);
        }
        for attr in entry.attrs() {
            insert_at(&mut obj, &self.groups, attr);
        }

        obj
    }
}

/// Insert `attr` into the object nested at `path`, creating groups on demand.
fn insert_at(root: &mut Map<String, Value>, path: &[String], attr: &Attr) {
    if attr.key.is_empty() {
        return;
    }

    let mut target = root;
    for group in path {
        let slot = target
            .entry(group.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot.as_object_mut() {
            Some(map) => target = map,
            None => return,
        }
    }
    target.insert(attr.key.clone(), attr.value.to_json_value());
}

impl Sink for JsonSink {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.options.min_level
    }

    fn handle(&self, _ctx: &Context, entry: &Entry) -> Result<()> {
        let mut line = serde_json::to_vec(&Value::Object(self.to_object(entry)))?;
        line.push(b'\n');
        self.writer.write_line(&line)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        let mut sink = self.clone();
        sink.scoped
            .extend(attrs.into_iter().map(|attr| (self.groups.clone(), attr)));
        Arc::new(sink)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        let mut sink = self.clone();
        if !name.is_empty() {
            sink.groups.push(name.to_string());
        }
        Arc::new(sink)
    }

    fn name(&self) -> &str {
        "json"
    }
}
