pub mod annotation;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod handler;
pub mod logger;
pub mod proxy;
pub mod record;

pub use loggable_common;

use std::collections::{HashMap, LinkedList};
use std::sync::Arc;

use annotation::Loggable;
use config::LoggableApplicationConfig;
use error::LoggableError;
use filter::{InvocationFilter, MethodInfo, MethodInvoker};
use format::{DefaultLogFormatter, LogFormatter};
use handler::aspect::LoggableInterceptor;
use logger::manager::LogManager;
use logger::LogSink;
use proxy::LoggableProxy;

pub type Error = LoggableError;
pub type Result<T> = std::result::Result<T, LoggableError>;
pub type BoxFuture<T> = loggable_common::BoxFuture<T>;

#[derive(Default)]
pub struct LoggableApplicationBuilder {
    formatter: Option<Arc<dyn LogFormatter>>,
    sink: Option<Arc<dyn LogSink>>,
    channels: Vec<(String, Arc<dyn LogSink>)>,
    default_channel: Option<String>,
    filters: Vec<Box<dyn InvocationFilter>>,
    method_configs: HashMap<String, Loggable>,
}

impl LoggableApplicationBuilder {
    pub fn formatter(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        let _ = self.formatter.insert(formatter);
        self
    }

    /// Replace the active sink entirely. A sink installed here is used as-is;
    /// if it lacks the channel capability the interceptor emits nothing.
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        let _ = self.sink.insert(sink);
        self
    }

    pub fn channel(mut self, name: &str, sink: Arc<dyn LogSink>) -> Self {
        self.channels.push((name.to_owned(), sink));
        self
    }

    pub fn default_channel(mut self, name: &str) -> Self {
        let _ = self.default_channel.insert(name.to_owned());
        self
    }

    /// Extra interceptors run ahead of the logging one, in insertion order.
    pub fn add_filter(mut self, filter: Box<dyn InvocationFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn init(mut self, config: LoggableApplicationConfig) -> Self {
        if let Some(methods) = config.get_methods() {
            for method in methods {
                self.method_configs
                    .insert(method.get_key(), method.get_loggable().clone());
            }
        }
        if let Some(channel) = config.get_default_channel() {
            self = self.default_channel(channel);
        }
        self
    }

    pub fn build(self) -> LoggableApplicationContext {
        let LoggableApplicationBuilder {
            formatter,
            sink,
            channels,
            default_channel,
            filters,
            method_configs,
        } = self;
        let sink = sink.unwrap_or_else(|| {
            let mut manager = LogManager::default();
            if let Some(default_channel) = &default_channel {
                manager.set_default(default_channel);
            }
            for (name, channel) in channels {
                manager.insert(&name, channel);
            }
            Arc::new(manager)
        });
        let formatter = formatter.unwrap_or_else(|| Arc::new(DefaultLogFormatter));
        let mut chain: LinkedList<&'static dyn InvocationFilter> = LinkedList::new();
        for filter in filters {
            chain.push_back(Box::leak(filter));
        }
        chain.push_back(Box::leak(Box::new(LoggableInterceptor::new(formatter, sink))));
        LoggableApplicationContext {
            filters: chain,
            method_configs,
        }
    }
}

pub struct LoggableApplicationContext {
    filters: LinkedList<&'static dyn InvocationFilter>,
    method_configs: HashMap<String, Loggable>,
}

impl LoggableApplicationContext {
    pub fn builder() -> LoggableApplicationBuilder {
        LoggableApplicationBuilder::default()
    }

    /// Wrap a target call. A method without an explicit annotation picks up
    /// one declared in the application config, if any.
    pub fn proxy(
        &self,
        mut method_info: MethodInfo,
        target: Arc<dyn MethodInvoker>,
    ) -> LoggableProxy {
        if method_info.loggable.is_none() {
            if let Some(loggable) = self.method_configs.get(&method_info.get_key()) {
                let _ = method_info.loggable.insert(loggable.clone());
            }
        }
        LoggableProxy::new(self.filters.clone(), Arc::new(method_info), target)
    }
}
