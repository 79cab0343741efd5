use std::env;
use std::sync::Arc;
use std::time::Instant;

use loggable_common::date_util::format_elapsed_seconds;
use serde_json::Value;
use tracing::warn;

use crate::annotation::Loggable;
use crate::error::LoggableError;
use crate::filter::{InvocationContext, InvocationFilter, ProceedingJoinPoint};
use crate::format::LogFormatter;
use crate::logger::LogSink;
use crate::record::LogRecord;
use crate::BoxFuture;

/// Environment variable consulted when a method's annotation names no driver.
pub const CHANNEL_ENV: &str = "LOG_CHANNEL";

/// Pass-through filter; keeps a chain well formed when no extra behavior is
/// wanted at a position.
pub struct DefaultAspect;

impl InvocationFilter for DefaultAspect {
    fn call(
        &'static self,
        join_point: ProceedingJoinPoint,
    ) -> BoxFuture<Result<InvocationContext, LoggableError>> {
        Box::pin(async move { join_point.proceed().await })
    }
}

/// Times an annotated invocation and dispatches one record for it to the
/// configured channel. Transparent to the wrapped call: the result flows back
/// unchanged and a failure propagates with nothing emitted.
pub struct LoggableInterceptor {
    formatter: Arc<dyn LogFormatter>,
    logger: Arc<dyn LogSink>,
}

impl LoggableInterceptor {
    pub fn new(formatter: Arc<dyn LogFormatter>, logger: Arc<dyn LogSink>) -> Self {
        LoggableInterceptor { formatter, logger }
    }

    fn emit(&self, loggable: &Loggable, context: &InvocationContext, time: String) {
        let mut record: LogRecord = self.formatter.format(loggable, context);
        if !loggable.skip_result {
            record.context.insert(
                "result".to_owned(),
                context.result.clone().unwrap_or(Value::Null),
            );
        }
        record.context.insert("time".to_owned(), Value::String(time));
        let driver = loggable
            .driver
            .clone()
            .unwrap_or_else(|| env::var(CHANNEL_ENV).unwrap_or_else(|_| "stderr".to_owned()));
        // Sinks without the channel capability drop the record silently.
        if let Some(channels) = self.logger.channels() {
            match channels.driver(&driver) {
                Some(sink) => sink.add_record(record),
                None => warn!("no logging channel {driver}"),
            }
        }
    }
}

impl InvocationFilter for LoggableInterceptor {
    fn call(
        &'static self,
        join_point: ProceedingJoinPoint,
    ) -> BoxFuture<Result<InvocationContext, LoggableError>> {
        Box::pin(async move {
            let loggable = join_point
                .context
                .method_info
                .loggable
                .clone()
                .unwrap_or_default();
            let start = Instant::now();
            let context = join_point.proceed().await?;
            let time = format_elapsed_seconds(start.elapsed());
            self.emit(&loggable, &context, time);
            Ok(context)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::filter::{MethodInfo, MethodInvoker};
    use crate::logger::sink::MemorySink;
    use crate::record::LogLevel;
    use crate::LoggableApplicationContext;

    struct EchoInvoker;

    impl MethodInvoker for EchoInvoker {
        fn invoke(
            &self,
            mut context: InvocationContext,
        ) -> BoxFuture<Result<InvocationContext, LoggableError>> {
            Box::pin(async move {
                let _ = context.result.insert(json!({ "echo": context.args }));
                Ok(context)
            })
        }
    }

    struct FailingInvoker;

    impl MethodInvoker for FailingInvoker {
        fn invoke(
            &self,
            _context: InvocationContext,
        ) -> BoxFuture<Result<InvocationContext, LoggableError>> {
            Box::pin(async move { Err(LoggableError::Method("boom".to_owned())) })
        }
    }

    fn loggable(driver: &str, skip_result: bool) -> Loggable {
        Loggable {
            value: LogLevel::Info,
            skip_result,
            driver: Some(driver.to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn result_is_returned_unchanged_and_logged() {
        let audit = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("audit", audit.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", Some(loggable("audit", false))),
            Arc::new(EchoInvoker),
        );
        let result = proxy.invoke(vec![json!("hello")]).await.unwrap();
        assert_eq!(result, json!({ "echo": ["hello"] }));

        let records = audit.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.message, "Loggable:EchoService.echo");
        assert_eq!(record.context["result"], json!({ "echo": ["hello"] }));
        assert!(record.context.contains_key("time"));
    }

    #[tokio::test]
    async fn skip_result_omits_the_result_entry() {
        let audit = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("audit", audit.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", Some(loggable("audit", true))),
            Arc::new(EchoInvoker),
        );
        proxy.invoke(vec![json!(1)]).await.unwrap();

        let records = audit.records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].context.contains_key("result"));
        assert!(records[0].context.contains_key("time"));
    }

    #[tokio::test]
    async fn time_entry_has_fifteen_fraction_digits() {
        let audit = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("audit", audit.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", Some(loggable("audit", false))),
            Arc::new(EchoInvoker),
        );
        proxy.invoke(vec![]).await.unwrap();

        let records = audit.records();
        let time = records[0].context["time"].as_str().unwrap();
        let (secs, fraction) = time.split_once('.').unwrap();
        assert!(secs.parse::<u64>().is_ok());
        assert_eq!(fraction.len(), 15);
    }

    #[tokio::test]
    async fn unannotated_method_uses_the_default_configuration() {
        // No driver in the default Loggable, so with LOG_CHANNEL unset and
        // then set the record lands on "stderr" and the named channel in
        // turn. One test keeps the env mutations sequential.
        env::remove_var(CHANNEL_ENV);
        let stderr = Arc::new(MemorySink::default());
        let custom = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("stderr", stderr.clone())
            .channel("custom", custom.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", None),
            Arc::new(EchoInvoker),
        );
        proxy.invoke(vec![]).await.unwrap();
        assert_eq!(stderr.records().len(), 1);
        assert!(stderr.records()[0].context.contains_key("result"));

        env::set_var(CHANNEL_ENV, "custom");
        proxy.invoke(vec![]).await.unwrap();
        env::remove_var(CHANNEL_ENV);
        assert_eq!(custom.records().len(), 1);
        assert_eq!(stderr.records().len(), 1);
    }

    #[tokio::test]
    async fn single_channel_sink_drops_the_record_silently() {
        let plain = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .sink(plain.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", Some(loggable("audit", false))),
            Arc::new(EchoInvoker),
        );
        let result = proxy.invoke(vec![json!(42)]).await.unwrap();
        assert_eq!(result, json!({ "echo": [42] }));
        assert!(plain.records().is_empty());
    }

    #[tokio::test]
    async fn target_failure_propagates_with_nothing_emitted() {
        let audit = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("audit", audit.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "fail", Some(loggable("audit", false))),
            Arc::new(FailingInvoker),
        );
        let error = proxy.invoke(vec![]).await.unwrap_err();
        assert!(matches!(error, LoggableError::Method(message) if message == "boom"));
        assert!(audit.records().is_empty());
    }

    #[tokio::test]
    async fn unknown_channel_emits_nowhere() {
        let audit = Arc::new(MemorySink::default());
        let context = LoggableApplicationContext::builder()
            .channel("audit", audit.clone())
            .build();
        let proxy = context.proxy(
            MethodInfo::new("EchoService", "echo", Some(loggable("missing", false))),
            Arc::new(EchoInvoker),
        );
        proxy.invoke(vec![]).await.unwrap();
        assert!(audit.records().is_empty());
    }
}
