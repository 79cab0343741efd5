use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::sink::{StderrSink, StdoutSink};
use super::{ChannelDispatch, LogSink};
use crate::record::LogRecord;

pub const DEFAULT_CHANNEL: &str = "stderr";

/// Registry of named channels. Records sent to the manager itself go to the
/// default channel; the interceptor resolves channels by name through the
/// `ChannelDispatch` capability.
pub struct LogManager {
    channels: HashMap<String, Arc<dyn LogSink>>,
    default_channel: String,
}

impl Default for LogManager {
    fn default() -> Self {
        let mut manager = LogManager {
            channels: Default::default(),
            default_channel: DEFAULT_CHANNEL.to_string(),
        };
        manager.insert("stderr", Arc::new(StderrSink));
        manager.insert("stdout", Arc::new(StdoutSink));
        manager
    }
}

impl LogManager {
    pub fn insert(&mut self, name: &str, sink: Arc<dyn LogSink>) {
        self.channels.insert(name.to_owned(), sink);
    }

    pub fn set_default(&mut self, name: &str) {
        name.clone_into(&mut self.default_channel);
    }
}

impl LogSink for LogManager {
    fn add_record(&self, record: LogRecord) {
        match self.driver(&self.default_channel) {
            Some(sink) => sink.add_record(record),
            None => warn!("no logging channel {}", self.default_channel),
        }
    }

    fn channels(&self) -> Option<&dyn ChannelDispatch> {
        Some(self)
    }
}

impl ChannelDispatch for LogManager {
    fn driver(&self, name: &str) -> Option<Arc<dyn LogSink>> {
        self.channels.get(name).cloned()
    }
}
