//! `io::Write` adapter that turns written lines into records
//!
//! For code that can only be handed a writer (child process output, legacy
//! libraries), `Logger::log_writer` returns a `LogWriter`: each complete line
//! becomes one record at a fixed level.

use super::{context::Context, level::Level, logger::Logger};
use std::io::{self, Write};

pub struct LogWriter {
    logger: Logger,
    level: Level,
    ctx: Context,
    buf: Vec<u8>,
}

impl Logger {
    pub fn log_writer(&self, level: Level) -> LogWriter {
        LogWriter {
            logger: self.clone(),
            level,
            ctx: Context::background(),
            buf: Vec::new(),
        }
    }
}

impl LogWriter {
    /// Context handed to the trace function and hooks for every line
    #[must_use]
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    fn emit_line(&self, line: &[u8]) -> io::Result<()> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() || !self.logger.enabled(&self.ctx, self.level) {
            return Ok(());
        }

        let msg = String::from_utf8_lossy(line);
        self.logger
            .emit(&self.ctx, self.level, None, &msg, Vec::new())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl Write for LogWriter {
    /// Always accepts all of `data`. A line the sink fails to write is
    /// reported on stderr and dropped, so a caller retrying on error can
    /// never log the same line twice.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.logger.is_discard() {
            return Ok(data.len());
        }

        self.buf.extend_from_slice(data);
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            if let Err(e) = self.emit_line(&line[..pos]) {
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed: {}",
                    self.logger.sink().name(),
                    e
                );
            }
        }
        Ok(data.len())
    }

    /// Emits any partial trailing line.
    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let rest = std::mem::take(&mut self.buf);
        self.emit_line(&rest)
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush log writer: {}", e);
        }
    }
}
