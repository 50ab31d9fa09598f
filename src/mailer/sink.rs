//! Log sinks receiving the simulator's human-readable lines

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Destination for log lines
///
/// A sink accepts a line of text and appends it. Writing never fails the
/// caller; sinks backed by I/O report errors through `tracing` instead.
pub trait LogSink: Send + Sync {
    /// Append a single line (without trailing newline)
    fn write_line(&self, line: &str);

    /// Append a group of lines produced by one send attempt
    fn write_lines(&self, lines: &[String]) {
        for line in lines {
            self.write_line(line);
        }
    }
}

/// Writes lines to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        self.write_lines(&[line.to_owned()]);
    }

    fn write_lines(&self, lines: &[String]) {
        let mut stdout = io::stdout().lock();
        for line in lines {
            if let Err(e) = writeln!(stdout, "{line}") {
                tracing::warn!(error = %e, "failed to write log line to stdout");
                return;
            }
        }
    }
}

/// Drops every line
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl LogSink for DiscardSink {
    fn write_line(&self, _line: &str) {}
}

/// Writes newline-terminated lines to any `Write` implementor
///
/// One send attempt's lines are written under a single lock, so they are not
/// interleaved with lines from concurrent attempts.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) {
        self.write_lines(&[line.to_owned()]);
    }

    fn write_lines(&self, lines: &[String]) {
        let mut writer = self.lock();
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(writer, "{line}"))
            .and_then(|()| writer.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write log lines");
        }
    }
}

/// Records lines in memory so tests can assert on them
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line recorded so far
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lock().push(line.to_owned());
    }

    fn write_lines(&self, lines: &[String]) {
        self.lock().extend_from_slice(lines);
    }
}

/// Forwards each line as a `tracing` info event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "fakemail", "{line}");
    }
}
