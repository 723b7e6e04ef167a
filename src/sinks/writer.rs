//! Shared, line-atomic output stream used by the formatting sinks

use crate::core::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Cloneable handle to one output stream.
///
/// Every record is written as one `write_all` under the lock, so lines from
/// concurrent callers never interleave.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }

    /// Write one complete line (the caller supplies the trailing newline).
    pub fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(line)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}
