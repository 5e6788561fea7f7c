//! log4rs setup.
//!
//! Logs always go to stderr; stdout is reserved for addresses.

use crate::error::Cidr2IpsError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Path of a log4rs yaml file to use instead of the built in setup.
pub const LOG_CONFIG_ENV: &str = "CIDR2IPS_LOG_CONFIG";
/// Level for the built in setup (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "CIDR2IPS_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Install the global logger.
///
/// Uses the yaml file named by [`LOG_CONFIG_ENV`] (default `log4rs.yml`) when
/// it exists, otherwise a stderr console logger at [`LOG_LEVEL_ENV`].
pub fn init() -> Result<(), Cidr2IpsError> {
    let file = std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());
    if Path::new(&file).exists() {
        log4rs::init_file(&file, Default::default())
            .map_err(|e| Cidr2IpsError::Logging(format!("{file}: {e}")))?;
        log::debug!("logging configured from {file}");
        return Ok(());
    }

    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    log4rs::init_config(stderr_config(level)?)
        .map_err(|e| Cidr2IpsError::Logging(e.to_string()))?;
    log::debug!("logging to stderr at {level}");
    Ok(())
}

/// Level from an env value, `warn` when unset or unknown.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Single console appender on stderr.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Cidr2IpsError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| Cidr2IpsError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_level(Some(" off ")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Info).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stderr");
    }
}
