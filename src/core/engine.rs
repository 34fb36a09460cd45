//! Structured-logging engine
//!
//! An [`Engine`] owns the level gate, the encoder configuration, the output
//! format and one sink. Logging is split in two steps: [`Engine::check`]
//! decides whether an entry is wanted, and [`CheckedEntry::write`] encodes and
//! writes it. Callers only build field lists once the check has passed.

use super::appender::Sink;
use super::encoder::{EncoderConfig, EntryCaller};
use super::error::Result;
use super::field::Field;
use super::log_entry::LogEntry;
use super::log_level::{AtomicLevel, LogLevel};
use super::options::Options;
use super::output_format::OutputFormat;
use parking_lot::Mutex;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

pub struct Engine {
    level: AtomicLevel,
    config: EncoderConfig,
    format: OutputFormat,
    sink: Mutex<Box<dyn Sink>>,
    with_caller: bool,
    with_stack: bool,
    name: Option<String>,
}

impl Engine {
    pub fn new(opts: &Options, format: OutputFormat, sink: Box<dyn Sink>) -> Self {
        Self {
            level: AtomicLevel::new(opts.level),
            config: EncoderConfig::from_options(opts),
            format,
            sink: Mutex::new(sink),
            with_caller: opts.with_caller,
            with_stack: opts.with_stack,
            name: opts.name.clone(),
        }
    }

    /// Gate an entry at `level`
    ///
    /// Returns `None` when the level is below the threshold. Panic and Fatal
    /// always yield an entry so that they terminate even when suppressed; such
    /// an entry writes nothing.
    #[track_caller]
    pub fn check(&self, level: LogLevel) -> Option<CheckedEntry<'_>> {
        let enabled = self.level.enabled(level);
        if !enabled && !level.is_terminal() {
            return None;
        }

        Some(CheckedEntry {
            engine: self,
            level,
            enabled,
            caller: Location::caller(),
        })
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.enabled(level)
    }

    pub fn level(&self) -> LogLevel {
        self.level.level()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.set_level(level);
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Flush the sink
    pub fn sync(&self) -> Result<()> {
        self.sink.lock().sync()
    }

    fn encode(&self, entry: &LogEntry, fields: &[Field]) -> String {
        self.format.encode(&self.config, entry, fields)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("level", &self.level())
            .field("format", &self.format)
            .field("with_caller", &self.with_caller)
            .field("with_stack", &self.with_stack)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An entry that passed [`Engine::check`]
#[must_use = "a checked entry does nothing until written"]
pub struct CheckedEntry<'a> {
    engine: &'a Engine,
    level: LogLevel,
    enabled: bool,
    caller: &'static Location<'static>,
}

impl CheckedEntry<'_> {
    /// Whether this entry will reach the sink
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Encode and write the entry, then terminate for Panic and Fatal
    ///
    /// Write failures are reported on stderr and never returned.
    pub fn write(self, message: &str, fields: &[Field]) {
        let engine = self.engine;

        if self.enabled {
            let mut entry = LogEntry::new(self.level, message).with_name(engine.name.clone());
            if engine.with_caller {
                entry = entry.with_caller(EntryCaller::from_location(self.caller));
            }
            if engine.with_stack {
                entry = entry.with_stack(Backtrace::force_capture().to_string());
            }

            let line = engine.encode(&entry, fields);
            let mut sink = engine.sink.lock();
            if let Err(e) = sink.write_entry(line.as_bytes()) {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
        }

        match self.level {
            LogLevel::Panic => panic!("{}", message),
            LogLevel::Fatal => {
                if let Err(e) = engine.sync() {
                    eprintln!("[LOGGER ERROR] Sync before exit failed: {}", e);
                }
                std::process::exit(1);
            }
            _ => {}
        }
    }
}
