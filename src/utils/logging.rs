use std::io::Write;

use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, Logger, LoggerHandle, Naming, Record,
};

use crate::launcher_error;
use crate::utils::config::ConfigDebug;
use crate::utils::errors::{LauncherError, LauncherErrorType};

const LOG_BASENAME: &str = "attendance-launcher";

/// Starts the global logger. The returned handle must be kept alive for the
/// lifetime of the application.
pub fn init_logger(debug: &ConfigDebug) -> Result<LoggerHandle, LauncherError> {
    let logger = Logger::try_with_str(&debug.log_level)
        .map_err(|e| launcher_error!(LauncherErrorType::LoggerError, e))?
        .format(log_format);

    let logger = match &debug.log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
            .rotate(
                Criterion::Size(3_000_000),
                Naming::Numbers,
                Cleanup::KeepLogFiles(15),
            ),
        None => logger.log_to_stdout(),
    };

    logger
        .start()
        .map_err(|e| launcher_error!(LauncherErrorType::LoggerError, e))
}

fn log_format(
    writer: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        writer,
        "[{}][{}][{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_log_spec_is_a_logger_error() {
        let debug = ConfigDebug {
            log_level: String::from("attendance_launcher=loud"),
            log_dir: None,
        };
        let Err(error) = init_logger(&debug) else {
            panic!("logger accepted an unknown level");
        };
        assert_eq!(error.error, LauncherErrorType::LoggerError);
    }
}
