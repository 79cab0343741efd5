use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity ladder of the logging backend this interceptor dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl LogLevel {
    /// The upper tiers have no `tracing` counterpart and collapse to ERROR.
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info | LogLevel::Notice => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => {
                tracing::Level::ERROR
            }
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Notice => "notice",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Alert => "alert",
            LogLevel::Emergency => "emergency",
        };
        f.write_str(name)
    }
}

/// One record per intercepted call, discarded after emission.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub context: Map<String, Value>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: String, context: Map<String, Value>) -> Self {
        LogRecord {
            level,
            message,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), "\"warning\"");
        let level: LogLevel = serde_json::from_str("\"emergency\"").unwrap();
        assert_eq!(level, LogLevel::Emergency);
    }

    #[test]
    fn level_display_matches_serde_name() {
        assert_eq!(LogLevel::Notice.to_string(), "notice");
        assert_eq!(LogLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn upper_tiers_collapse_to_error() {
        assert_eq!(LogLevel::Alert.as_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Notice.as_tracing_level(), tracing::Level::INFO);
    }
}
