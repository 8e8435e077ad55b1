// src/logging.rs

use crate::errors::{RagError, RagResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts file logging at the configured level. The terminal is owned by the
/// UI, so nothing may ever be written to stdout or stderr.
///
/// The returned handle must stay alive for the lifetime of the process.
pub fn init_logging(level: &str) -> RagResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| RagError::logging_error(format!("Invalid log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("ragchat").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| RagError::logging_error(format!("Failed to start logger: {}", e)))
}
