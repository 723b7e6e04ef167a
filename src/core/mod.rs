//! Core logger types and traits

pub mod build_info;
pub mod context;
pub mod error;
pub mod events;
pub mod handler;
pub mod level;
pub mod log_writer;
pub mod logger;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use build_info::BuildInfo;
pub use context::{trace_id_from_context, Context, TraceIdFn};
pub use error::{LoggerError, Result};
pub use events::{EventFn, Events};
pub use handler::HookSink;
pub use level::Level;
pub use log_writer::LogWriter;
pub use logger::{Logger, LoggerBuilder, Output};
pub use output_format::OutputFormat;
pub use record::{Entry, Record, Source};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use value::{Attr, FieldValue};
