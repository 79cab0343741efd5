use std::sync::Arc;

use crate::record::LogRecord;

pub mod manager;
pub mod sink;

/// Destination for formatted records. `channels` is the optional
/// multi-channel capability; the interceptor emits only through it and is a
/// no-op against sinks that stay with the default.
pub trait LogSink: Send + Sync {
    fn add_record(&self, record: LogRecord);

    fn channels(&self) -> Option<&dyn ChannelDispatch> {
        None
    }
}

/// Named-channel dispatch over a set of registered sinks.
pub trait ChannelDispatch: Send + Sync {
    fn driver(&self, name: &str) -> Option<Arc<dyn LogSink>>;
}
