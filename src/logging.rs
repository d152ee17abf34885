//! Process-wide logging bootstrap
//!
//! Installs a `flexi_logger` backend for the `log` facade. Output goes to
//! stderr so stdout carries only the success line. The level comes from
//! `RUST_LOG` when set, otherwise from the caller's default.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

use crate::error::GenerateError;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start logging once per process. Later calls are no-ops.
pub fn init_logging(default_level: &str) -> Result<(), GenerateError> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, FlexiLoggerError> {
        Logger::try_with_env_or_str(default_level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
    })?;

    log::debug!("logging initialized at default level {}", default_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        init_logging("warn").unwrap();
        init_logging("debug").unwrap();
        assert!(LOGGER.get().is_some());
    }
}
