//! Sink that drops everything

use crate::core::{Attr, Context, Entry, Level, Result, Sink};
use std::sync::Arc;

/// A sink that is enabled for no level and accepts every entry silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn enabled(&self, _ctx: &Context, _level: Level) -> bool {
        false
    }

    fn handle(&self, _ctx: &Context, _entry: &Entry) -> Result<()> {
        Ok(())
    }

    fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Sink> {
        Arc::new(DiscardSink)
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Sink> {
        Arc::new(DiscardSink)
    }

    fn name(&self) -> &str {
        "discard"
    }
}
