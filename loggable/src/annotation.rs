use serde::{Deserialize, Serialize};

use crate::record::LogLevel;

/// Per-method logging configuration, the explicit stand-in for a `Loggable`
/// annotation. Attached to a `MethodInfo` when the proxy is composed and
/// immutable afterwards; `Default` is the "no flags set" configuration used
/// for methods that carry none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Loggable {
    pub value: LogLevel,
    pub name: String,
    pub skip_result: bool,
    pub driver: Option<String>,
}

impl Default for Loggable {
    fn default() -> Self {
        Loggable {
            value: LogLevel::Info,
            name: "Loggable".to_string(),
            skip_result: false,
            driver: None,
        }
    }
}
