//! # Service Logger
//!
//! A structured logger for services: JSON (or text) records tagged with the
//! service name, caller `file:line` and an optional trace id, plus per-level
//! event hooks that run before a record is written.
//!
//! ## Features
//!
//! - **Event hooks**: one optional callback per level, dispatched on exact level
//! - **Trace ids**: extracted from the request [`Context`] on every call
//! - **Pluggable sinks**: any [`Sink`] can be wrapped, scoped and decorated
//! - **Log filter**: [`filter::LogFilter`] turns JSON lines back into text
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::{attrs, info};
//!
//! let log = Logger::new(Output::Stdout, Level::Info, "SALES", Some(trace_id_from_context()));
//! let ctx = Context::background().with_new_trace_id();
//!
//! log.info(&ctx, "startup", attrs!["cpus" => 4]);
//! info!(log, &ctx, "ready", "port" => 8080);
//! ```

pub mod core;
pub mod filter;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        trace_id_from_context, Attr, BuildInfo, Context, Events, FieldValue, Level, Logger,
        LoggerBuilder, LoggerError, Output, OutputFormat, Record, Result, Sink, Source,
        TimestampFormat, TraceIdFn,
    };
}

pub use crate::core::{
    trace_id_from_context, Attr, BuildInfo, Context, Entry, EventFn, Events, FieldValue,
    HookSink, Level, LogWriter, Logger, LoggerBuilder, LoggerError, Output, OutputFormat, Record,
    Result, Sink, Source, TimestampFormat, TraceIdFn,
};
pub use sinks::{DiscardSink, JsonSink, SharedWriter, SinkOptions, SourceFormat, TextSink};
