//! Sink trait for record destinations

use super::{context::Context, error::Result, level::Level, record::Entry, value::Attr};
use std::sync::Arc;

/// Formats and writes entries.
///
/// Sinks are immutable once built: scoping with [`Sink::with_attrs`] or
/// [`Sink::with_group`] returns a new sink and leaves `self` untouched.
pub trait Sink: Send + Sync {
    /// Whether entries at `level` would be written at all.
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    fn handle(&self, ctx: &Context, entry: &Entry) -> Result<()>;

    /// Sink that also writes `attrs` with every entry.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink>;

    /// Sink that nests every attribute added from now on under `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Sink>;

    fn name(&self) -> &str;
}
