//! Per-level event hooks
//!
//! Hooks run synchronously on the logging thread, before the record is
//! written. A slow hook slows down the call that triggered it.

use super::context::Context;
use super::level::Level;
use super::record::Record;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the normalized record of a matching level.
pub type EventFn = Arc<dyn Fn(&Context, &Record) + Send + Sync>;

/// Hook table, one optional callback per level.
#[derive(Clone, Default)]
pub struct Events {
    pub debug: Option<EventFn>,
    pub info: Option<EventFn>,
    pub warn: Option<EventFn>,
    pub error: Option<EventFn>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_debug<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &Record) + Send + Sync + 'static,
    {
        self.debug = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_info<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &Record) + Send + Sync + 'static,
    {
        self.info = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_warn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &Record) + Send + Sync + 'static,
    {
        self.warn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &Record) + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(f));
        self
    }

    /// Hook registered for exactly `level`.
    ///
    /// Dispatch is by exact match: an error hook never sees warnings.
    pub fn get(&self, level: Level) -> Option<&EventFn> {
        match level {
            Level::Debug => self.debug.as_ref(),
            Level::Info => self.info.as_ref(),
            Level::Warn => self.warn.as_ref(),
            Level::Error => self.error.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.debug.is_none() && self.info.is_none() && self.warn.is_none() && self.error.is_none()
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("debug", &self.debug.is_some())
            .field("info", &self.info.is_some())
            .field("warn", &self.warn.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}
