//! Logging setup
//!
//! Previews are reported through the `log` facade at `info` level, so the
//! stdout dispatch prints them without any decoration. The optional log file
//! keeps a timestamped record of every run.

use crate::constants::APPLICATION;
use anyhow::Result;
use chrono::SecondsFormat;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Previews, warnings and errors (default)
    Info,
    /// Also the operations applied and every preview built
    Debug,
    /// Also each single transformation step
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,  // Default
            1 => LogLevel::Debug, // -v
            _ => LogLevel::Trace, // -vv or more
        }
    }
}

/// Initialise the logger with the specified verbosity level
///
/// Messages go to stdout, tinted by level only when stdout is a terminal.
/// When `log_file` is not empty they are also appended to that file.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let base_logger = Dispatch::new().level(verbosity.to_level_filter());

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);
    let tinted = atty::is(atty::Stream::Stdout);

    let output_logger = Dispatch::new()
        .format(move |out, message, record| {
            if tinted {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors_line.get_color(&record.level()).to_fg_str(),
                    message
                ))
            } else {
                out.finish(format_args!("{message}"))
            }
        })
        .chain(std::io::stdout());

    let logger = if log_file.is_empty() {
        base_logger.chain(output_logger)
    } else {
        base_logger
            .chain(
                Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{}",
                            file_line(
                                &chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                                record.level(),
                                &message.to_string(),
                            )
                        ))
                    })
                    .chain(fern::log_file(log_file)?),
            )
            .chain(output_logger)
    };
    logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Formats one line of the log file
fn file_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{timestamp} {APPLICATION}[{level:<5}] {message}")
}

/// Pick the coloured message when stdout is a terminal, the plain one otherwise
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_to_level_filter() {
        assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warning.to_level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_log_level_from_occurrences() {
        assert_eq!(LogLevel::from_occurrences(0), LogLevel::Info);
        assert_eq!(LogLevel::from_occurrences(1), LogLevel::Debug);
        assert_eq!(LogLevel::from_occurrences(2), LogLevel::Trace);
        assert_eq!(LogLevel::from_occurrences(255), LogLevel::Trace);
    }

    #[test]
    fn test_file_line() {
        let line = file_line(
            "2024-05-01T10:00:00+02:00",
            Level::Info,
            "a_b.txt -> a b.txt (1.00 KiB)",
        );
        assert_eq!(
            line,
            "2024-05-01T10:00:00+02:00 namely[INFO ] a_b.txt -> a b.txt (1.00 KiB)"
        );

        let line = file_line("2024-05-01T10:00:00+02:00", Level::Error, "missing");
        assert_eq!(line, "2024-05-01T10:00:00+02:00 namely[ERROR] missing");
    }

    #[test]
    fn test_format_message() {
        // Depends on whether stdout is a terminal, so accept either branch
        let plain_message = "a.txt -> b.txt";
        let colored_message = "a.txt -> \x1B[32mb.txt\x1B[0m";

        let result = format_message(plain_message, colored_message);
        assert!(
            result == plain_message || result == colored_message,
            "Result should be either the plain message or the colored message"
        );
    }
}
