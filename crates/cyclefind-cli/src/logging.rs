//! Logging setup for the `cyclefind` binary.
//!
//! The library crate only emits `tracing` events; this module installs the
//! global subscriber. Records go to stderr by default, or are appended to
//! `--log-file` one per line in the form:
//!
//! ```text
//! 2026-10-14T09:12:44.118Z | WARN | duplicate node key, keeping the last successor list node=A
//! ```
//!
//! `RUST_LOG` overrides the level chosen from `--quiet`/`--verbose`.
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::error::CliError;

/// Logging configuration derived from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub default_level: Level,
    /// Append records to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Maps `--quiet` to `error`, `--verbose` to `debug`, otherwise `warn`.
    pub fn from_flags(quiet: bool, verbose: bool, log_file: Option<PathBuf>) -> Self {
        let default_level = if quiet {
            Level::ERROR
        } else if verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        Self {
            default_level,
            log_file,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level.to_string()))
    }
}

/// Installs the global subscriber described by `config`.
///
/// A second call, or a call after another subscriber was installed, leaves
/// the existing subscriber in place.
///
/// # Errors
///
/// Returns [`CliError::LogFileError`] if the log file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CliError> {
    let filter = config.filter();

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CliError::LogFileError {
                    path: path.clone(),
                    detail: e.to_string(),
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .event_format(PipeFormat),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}

/// Event formatter writing `timestamp | LEVEL | message fields`.
struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        SystemTime.format_time(&mut writer)?;
        write!(writer, " | {} | ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
