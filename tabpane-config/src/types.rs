//! Small shared types used by the config and by the tab coordinator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the profile a pane's session was created from
pub type ProfileId = Uuid;

/// Unique identifier for a tab
pub type TabId = u64;

/// Log level for debug logging to file.
///
/// Controls the verbosity of log output written to the debug log file.
/// The `DEBUG_LEVEL` environment variable takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_serde_lowercase() {
        let yaml = serde_yaml_ng::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(yaml.trim(), "debug");
        let parsed: LogLevel = serde_yaml_ng::from_str("trace").unwrap();
        assert_eq!(parsed, LogLevel::Trace);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    }
}
