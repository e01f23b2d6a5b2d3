//! Routes `tracing` output to the browser console
//!
//! Each formatted event is buffered and emitted as a single console call
//! when the fmt layer drops its writer. Warnings and errors go to
//! `console.warn` / `console.error` so they show up in devtools filters.

use std::io;
use std::str::FromStr;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Installs the console subscriber. Later calls are no-ops.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!(%level, "console logging installed");
    }
}

/// Parses a level name such as "debug" or "WARN"
pub fn parse_level(name: &str) -> Option<Level> {
    Level::from_str(name.trim()).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl From<&Level> for ConsoleLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            _ => ConsoleLevel::Log,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(meta.level().into())
    }
}

pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        Some(text)
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
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: ConsoleLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        ConsoleLevel::Log => web_sys::console::log_1(&value),
        ConsoleLevel::Warn => web_sys::console::warn_1(&value),
        ConsoleLevel::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: ConsoleLevel, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_console_level_mapping() {
        assert_eq!(ConsoleLevel::from(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::from(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::from(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn test_writer_joins_fragments_into_one_line() {
        let mut writer = ConsoleWriter::new(ConsoleLevel::Log);
        write!(writer, "INFO ").unwrap();
        writeln!(writer, "lightbox opened index=2").unwrap();
        assert_eq!(
            writer.take_line().as_deref(),
            Some("INFO lightbox opened index=2")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_init_is_idempotent() {
        init(Level::INFO);
        init(Level::DEBUG);
        tracing::info!("still logging");
    }
}
