//! Logging backend for the `log` facade.
//!
//! In the TUI, records are forwarded into the activity log over a channel;
//! one-shot commands print them to stderr. `RUST_LOG` picks the threshold.

use crate::events::Event;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Where log records end up.
#[derive(Debug)]
enum Sink {
    /// The TUI activity log. Full queue drops the record.
    Activity(mpsc::Sender<Event>),
    Stderr,
}

#[derive(Debug)]
struct ActivityLogger {
    threshold: LogLevel,
    sink: Sink,
}

impl Log for ActivityLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Keep dependency chatter (hyper, rustls, ...) out of the activity log.
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            && should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = Event::new(
            record.level().into(),
            record.target(),
            record.args().to_string(),
        );
        match &self.sink {
            Sink::Activity(sender) => {
                let _ = sender.try_send(event);
            }
            Sink::Stderr => eprintln!("{}", event),
        }
    }

    fn flush(&self) {}
}

fn install(sink: Sink) -> Result<(), SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(ActivityLogger { threshold, sink }))?;
    log::set_max_level(threshold.into());
    Ok(())
}

/// Routes log records into the TUI activity log.
pub fn init_activity_logger(sender: mpsc::Sender<Event>) -> Result<(), SetLoggerError> {
    install(Sink::Activity(sender))
}

/// Routes log records to stderr, for one-shot commands.
pub fn init_stderr_logger() -> Result<(), SetLoggerError> {
    install(Sink::Stderr)
}
