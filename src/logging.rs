//! File logging for the terminal application.
//!
//! Library code only uses the `log` macros; the binary calls
//! [`init_logging`] once at startup. Log lines carry `event=` keys and
//! counts, never contact details or passwords.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::error::{HeroError, HeroResult};

const LOG_FILE_BASENAME: &str = "contact_hero";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Starts rotating file logs under `log_dir`.
///
/// Repeated calls with the same directory are no-ops; a different directory
/// is rejected.
pub fn init_logging(level: &str, log_dir: &Path) -> HeroResult<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(HeroError::Other(format!(
            "logging already initialized at `{}`",
            state.log_dir.display()
        )));
    }

    LOGGING_STATE.get_or_try_init(|| -> HeroResult<LoggingState> {
        std::fs::create_dir_all(log_dir)?;

        let logger = Logger::try_with_str(level)
            .map_err(|e| HeroError::Other(format!("invalid log level `{}`: {}", level, e)))?
            .log_to_file(FileSpec::default().directory(log_dir).basename(LOG_FILE_BASENAME))
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| HeroError::Other(format!("failed to start logger: {}", e)))?;

        info!(
            "event=app_start level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;
    Ok(())
}

fn normalize_level(level: &str) -> HeroResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(HeroError::Other(format!("unsupported log level `{}`", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_levels() {
        assert_eq!(normalize_level(" INFO ").unwrap(), "info");
        assert_eq!(normalize_level("warning").unwrap(), "warn");
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        assert!(normalize_level("verbose").is_err());
    }
}
