//! Reformatting of JSON log lines for human readers
//!
//! Turns each emitted JSON record back into
//! `service: time: file: level: trace_id: msg: key[value]: ...`,
//! optionally keeping only one service.

use crate::core::Result;
use serde_json::{Map, Value};
use std::io::{BufRead, Write};

/// Trace id shown for records that carry none.
pub const NIL_TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Keys printed in fixed positions, in output order.
const FIXED_KEYS: [&str; 6] = ["service", "time", "file", "level", "trace_id", "msg"];

#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Lowercased service name; `None` keeps every line.
    service: Option<String>,
}

impl LogFilter {
    /// Filter on `service`, compared case-insensitively and otherwise
    /// verbatim. Empty keeps all.
    pub fn new(service: &str) -> Self {
        Self {
            service: (!service.is_empty()).then(|| service.to_lowercase()),
        }
    }

    pub fn is_filtering(&self) -> bool {
        self.service.is_some()
    }

    /// Output for one input line, or `None` when the line is dropped.
    ///
    /// Lines that are not JSON objects pass through untouched unless a
    /// service filter is active.
    pub fn format_line(&self, line: &str) -> Option<String> {
        let record = match serde_json::from_str::<Map<String, Value>>(line) {
            Ok(record) => record,
            Err(_) => return (!self.is_filtering()).then(|| line.to_string()),
        };

        if let Some(wanted) = &self.service {
            let matches = record
                .get("service")
                .and_then(Value::as_str)
                .map(|service| service.to_lowercase() == *wanted)
                .unwrap_or(false);
            if !matches {
                return None;
            }
        }

        let mut fields: Vec<String> = FIXED_KEYS
            .iter()
            .map(|key| match (*key, record.get(*key)) {
                ("trace_id", None) => NIL_TRACE_ID.to_string(),
                (_, value) => render(value),
            })
            .collect();

        fields.extend(
            record
                .iter()
                .filter(|(key, _)| !FIXED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| format!("{}[{}]", key, render(Some(value)))),
        );

        Some(fields.join(": "))
    }

    /// Filter every line of `input` into `output`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim_end_matches(['\n', '\r']);
            if let Some(formatted) = self.format_line(line) {
                writeln!(output, "{}", formatted)?;
            }
        }
        output.flush()?;
        Ok(())
    }
}

/// Strings print bare, other values as their JSON text, missing as empty.
fn render(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
