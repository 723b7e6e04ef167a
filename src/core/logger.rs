//! Main logger implementation

use super::{
    context::{Context, TraceIdFn},
    error::Result,
    events::Events,
    handler::HookSink,
    level::Level,
    output_format::OutputFormat,
    record::{Entry, Source},
    sink::Sink,
    timestamp::TimestampFormat,
    value::Attr,
};
use crate::sinks::{DiscardSink, JsonSink, SharedWriter, SinkOptions, SourceFormat, TextSink};
use chrono::Utc;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Where a facade-built logger writes.
pub enum Output {
    Stdout,
    Stderr,
    Writer(SharedWriter),
    /// Drop everything; the logger short-circuits before doing any work.
    Discard,
}

impl Output {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(SharedWriter::new(writer))
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("Stdout"),
            Output::Stderr => f.write_str("Stderr"),
            Output::Writer(_) => f.write_str("Writer"),
            Output::Discard => f.write_str("Discard"),
        }
    }
}

/// Structured logger with per-level event hooks and trace id injection.
///
/// Configuration is fixed at construction; a `Logger` is cheap to clone and
/// safe to share between threads.
#[derive(Clone)]
pub struct Logger {
    discard: bool,
    sink: Arc<dyn Sink>,
    trace_id_fn: Option<TraceIdFn>,
}

impl Logger {
    /// JSON logger without hooks.
    pub fn new(
        output: Output,
        min_level: Level,
        service_name: &str,
        trace_id_fn: Option<TraceIdFn>,
    ) -> Self {
        Self::with_events(output, min_level, service_name, trace_id_fn, Events::new())
    }

    /// JSON logger that also runs `events` for matching levels.
    pub fn with_events(
        output: Output,
        min_level: Level,
        service_name: &str,
        trace_id_fn: Option<TraceIdFn>,
        events: Events,
    ) -> Self {
        let mut builder = Self::builder()
            .output(output)
            .min_level(min_level)
            .service_name(service_name)
            .events(events);
        if let Some(trace_id_fn) = trace_id_fn {
            builder = builder.trace_id_fn(trace_id_fn);
        }
        builder.build()
    }

    /// Wrap a pre-built sink as is; no `service` attribute is added.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            discard: false,
            sink,
            trace_id_fn: None,
        }
    }

    /// Logger whose every call returns immediately.
    pub fn discard() -> Self {
        Self {
            discard: true,
            sink: Arc::new(DiscardSink),
            trace_id_fn: None,
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// True for loggers built with [`Logger::discard`] or [`Output::Discard`].
    pub fn is_discard(&self) -> bool {
        self.discard
    }

    /// The sink every record is handed to, decorators included.
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Logger whose records all carry `attrs`.
    #[must_use]
    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        Self {
            discard: self.discard,
            sink: self.sink.with_attrs(attrs),
            trace_id_fn: self.trace_id_fn.clone(),
        }
    }

    /// Logger that nests attributes added from now on under `name`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self {
            discard: self.discard,
            sink: self.sink.with_group(name),
            trace_id_fn: self.trace_id_fn.clone(),
        }
    }

    /// Whether a record at `level` would be written. Always false when
    /// discarding.
    pub fn enabled(&self, ctx: &Context, level: Level) -> bool {
        !self.discard && self.sink.enabled(ctx, level)
    }

    /// Log a debug message attributed to the calling line.
    #[track_caller]
    pub fn debug(&self, ctx: &Context, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Debug, None, msg, attrs);
    }

    /// Debug record attributed to `caller` instead of the call site.
    pub fn debugc(&self, ctx: &Context, caller: Source, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Debug, Some(caller), msg, attrs);
    }

    /// Log an info message attributed to the calling line.
    #[track_caller]
    pub fn info(&self, ctx: &Context, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Info, None, msg, attrs);
    }

    /// Info record attributed to `caller` instead of the call site.
    pub fn infoc(&self, ctx: &Context, caller: Source, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Info, Some(caller), msg, attrs);
    }

    /// Log a warning attributed to the calling line.
    #[track_caller]
    pub fn warn(&self, ctx: &Context, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Warn, None, msg, attrs);
    }

    /// Warning attributed to `caller` instead of the call site.
    pub fn warnc(&self, ctx: &Context, caller: Source, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Warn, Some(caller), msg, attrs);
    }

    /// Log an error attributed to the calling line.
    ///
    /// Sink failures are reported on stderr; use [`Logger::try_log`] to
    /// handle them instead.
    #[track_caller]
    pub fn error(&self, ctx: &Context, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Error, None, msg, attrs);
    }

    /// Error record attributed to `caller` instead of the call site.
    pub fn errorc(&self, ctx: &Context, caller: Source, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, Level::Error, Some(caller), msg, attrs);
    }

    /// Log at a runtime-chosen level.
    #[track_caller]
    pub fn log(&self, ctx: &Context, level: Level, msg: &str, attrs: Vec<Attr>) {
        if self.discard {
            return;
        }
        self.write(ctx, level, None, msg, attrs);
    }

    /// Like [`Logger::log`] with an explicit call site, returning the sink's
    /// error instead of reporting it on stderr.
    pub fn try_log(
        &self,
        ctx: &Context,
        level: Level,
        caller: Source,
        msg: &str,
        attrs: Vec<Attr>,
    ) -> Result<()> {
        if self.discard {
            return Ok(());
        }
        self.try_write(ctx, level, Some(caller), msg, attrs)
    }

    #[track_caller]
    fn write(
        &self,
        ctx: &Context,
        level: Level,
        caller: Option<Source>,
        msg: &str,
        attrs: Vec<Attr>,
    ) {
        if let Err(e) = self.try_write(ctx, level, caller, msg, attrs) {
            eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", self.sink.name(), e);
        }
    }

    #[track_caller]
    fn try_write(
        &self,
        ctx: &Context,
        level: Level,
        caller: Option<Source>,
        msg: &str,
        attrs: Vec<Attr>,
    ) -> Result<()> {
        if !self.sink.enabled(ctx, level) {
            return Ok(());
        }

        let source = match caller {
            Some(source) => source,
            None => Source::caller(),
        };
        self.emit(ctx, level, Some(source), msg, attrs)
    }

    /// Build the entry and hand it to the sink. Callers check `enabled`.
    pub(crate) fn emit(
        &self,
        ctx: &Context,
        level: Level,
        source: Option<Source>,
        msg: &str,
        attrs: Vec<Attr>,
    ) -> Result<()> {
        let mut entry = Entry::new(Utc::now(), level, msg, source);
        entry.add_all(attrs);

        if let Some(trace_id_fn) = &self.trace_id_fn {
            entry.add(Attr::new("trace_id", trace_id_fn(ctx)));
        }

        self.sink.handle(ctx, &entry)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("discard", &self.discard)
            .field("sink", &self.sink.name())
            .field("trace_id_fn", &self.trace_id_fn.is_some())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use service_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .output(Output::Stdout)
///     .min_level(Level::Debug)
///     .service_name("SALES")
///     .trace_id_fn(trace_id_from_context())
///     .events(Events::new().on_error(|_ctx, record| {
///         eprintln!("ALERT: {}", record.message);
///     }))
///     .build();
/// ```
pub struct LoggerBuilder {
    output: Output,
    min_level: Level,
    service_name: String,
    trace_id_fn: Option<TraceIdFn>,
    events: Events,
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    source_format: SourceFormat,
    use_colors: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            output: Output::Stdout,
            min_level: Level::Info,
            service_name: String::new(),
            trace_id_fn: None,
            events: Events::new(),
            format: OutputFormat::Json,
            timestamp_format: TimestampFormat::default(),
            source_format: SourceFormat::Basename,
            use_colors: false,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Value of the `service` attribute attached to every record
    #[must_use = "builder methods return a new value"]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Function whose result is attached to every record as `trace_id`
    #[must_use = "builder methods return a new value"]
    pub fn trace_id_fn(mut self, f: TraceIdFn) -> Self {
        self.trace_id_fn = Some(f);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn source_format(mut self, format: SourceFormat) -> Self {
        self.source_format = format;
        self
    }

    /// Colour level labels of the text format
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn build(self) -> Logger {
        let writer = match self.output {
            Output::Stdout => SharedWriter::stdout(),
            Output::Stderr => SharedWriter::stderr(),
            Output::Writer(writer) => writer,
            Output::Discard => {
                return Logger {
                    discard: true,
                    sink: Arc::new(DiscardSink),
                    trace_id_fn: self.trace_id_fn,
                }
            }
        };

        let options = SinkOptions::new(self.min_level)
            .with_source(self.source_format)
            .with_timestamp_format(self.timestamp_format);
        let mut sink: Arc<dyn Sink> = match self.format {
            OutputFormat::Json => Arc::new(JsonSink::new(writer, options)),
            OutputFormat::Text => {
                Arc::new(TextSink::new(writer, options).with_colors(self.use_colors))
            }
        };

        if !self.events.is_empty() {
            sink = Arc::new(HookSink::new(sink, self.events));
        }

        Logger {
            discard: false,
            sink: sink.with_attrs(vec![Attr::new("service", self.service_name)]),
            trace_id_fn: self.trace_id_fn,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
