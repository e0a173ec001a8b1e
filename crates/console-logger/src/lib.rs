//! Console Logger
//!
//! A `tracing` subscriber for WASM frontends. Each formatted event is buffered
//! and handed to the browser console method matching its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to install global subscriber: {0}")]
    Init(String),
}

/// Browser console method an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG => ConsoleMethod::Log,
            Level::TRACE => ConsoleMethod::Debug,
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Info => web_sys::console::info_1(&value),
            ConsoleMethod::Log => web_sys::console::log_1(&value),
            ConsoleMethod::Debug => web_sys::console::debug_1(&value),
        }
    }
}

/// Collects one formatted event and flushes it to the console on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self { method, buffer: Vec::new() }
    }

    /// Buffered line without the trailing newline the formatter appends
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            self.method.emit(&self.line());
        }
    }
}

/// `MakeWriter` that picks the console method from the event metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Install the console subscriber as the global default.
///
/// Timestamps are disabled: `SystemTime` is not available on
/// `wasm32-unknown-unknown`.
pub fn init_logger(max_level: Level) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(&Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_buffers_whole_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        write!(writer, " INFO todo_list_ui::store: ").unwrap();
        writeln!(writer, "added todo").unwrap();
        assert_eq!(writer.line(), " INFO todo_list_ui::store: added todo");
        // Nothing may reach web_sys natively.
        writer.buffer.clear();
    }
}
