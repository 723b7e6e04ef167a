//! Request-scoped context handed to every log call
//!
//! A `Context` is the ambient value the trace function and event hooks read
//! from. It is cheap to clone and never mutated by the logger.

use super::value::FieldValue;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Extracts a trace id from the request context.
pub type TraceIdFn = Arc<dyn Fn(&Context) -> String + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct Context {
    trace_id: Option<String>,
    values: HashMap<String, FieldValue>,
}

impl Context {
    /// Empty root context
    pub fn background() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Attach a freshly generated (v4) trace id
    #[must_use]
    pub fn with_new_trace_id(self) -> Self {
        self.with_trace_id(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn with_value<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }
}

/// Trace function that reads the id stored with [`Context::with_trace_id`],
/// yielding an empty string for contexts without one.
pub fn trace_id_from_context() -> TraceIdFn {
    Arc::new(|ctx: &Context| ctx.trace_id().unwrap_or_default().to_string())
}
