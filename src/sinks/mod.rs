//! Sink implementations

pub mod discard;
pub mod json;
pub mod options;
pub mod text;
pub mod writer;

pub use discard::DiscardSink;
pub use json::JsonSink;
pub use options::{SinkOptions, SourceFormat};
pub use text::TextSink;
pub use writer::SharedWriter;

pub use crate::core::{HookSink, Sink};
