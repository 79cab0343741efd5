use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use serde_json::json;

use super::LogSink;
use crate::record::{LogLevel, LogRecord};

fn render(record: &LogRecord) -> String {
    json!({
        "datetime": Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string(),
        "level": record.level,
        "message": record.message,
        "context": record.context,
    })
    .to_string()
}

/// One JSON line per record on stderr.
pub struct StderrSink;

impl LogSink for StderrSink {
    fn add_record(&self, record: LogRecord) {
        let line = render(&record);
        let stderr = std::io::stderr();
        let mut guard = stderr.lock();
        let _ = writeln!(guard, "{line}");
    }
}

/// One JSON line per record on stdout.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn add_record(&self, record: LogRecord) {
        let line = render(&record);
        let stdout = std::io::stdout();
        let mut guard = stdout.lock();
        let _ = writeln!(guard, "{line}");
    }
}

/// Forwards records into the active `tracing` subscriber at the mapped level.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn add_record(&self, record: LogRecord) {
        let context = serde_json::Value::Object(record.context);
        match record.level {
            LogLevel::Debug => tracing::debug!(context = %context, "{}", record.message),
            LogLevel::Info | LogLevel::Notice => {
                tracing::info!(context = %context, "{}", record.message)
            }
            LogLevel::Warning => tracing::warn!(context = %context, "{}", record.message),
            LogLevel::Error | LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => {
                tracing::error!(context = %context, "{}", record.message)
            }
        }
    }
}

/// Captures records so callers can assert on what was emitted.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn add_record(&self, record: LogRecord) {
        self.records.lock().unwrap().push(record);
    }
}
