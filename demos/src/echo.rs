use std::sync::Arc;

use loggable_rs::annotation::Loggable;
use loggable_rs::filter::{InvocationContext, MethodInfo, MethodInvoker};
use loggable_rs::loggable_common::logs::init_log;
use loggable_rs::record::LogLevel;
use loggable_rs::{BoxFuture, LoggableApplicationContext};
use serde_json::{json, Value};

struct EchoService;

impl MethodInvoker for EchoService {
    fn invoke(
        &self,
        mut context: InvocationContext,
    ) -> BoxFuture<Result<InvocationContext, loggable_rs::Error>> {
        Box::pin(async move {
            let _ = context.result.insert(json!({ "echo": context.args }));
            Ok(context)
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), loggable_rs::Error> {
    init_log();
    let context = LoggableApplicationContext::builder()
        .default_channel("stdout")
        .build();
    let proxy = context.proxy(
        MethodInfo::new(
            "EchoService",
            "echo",
            Some(Loggable {
                value: LogLevel::Info,
                driver: Some("stdout".to_owned()),
                ..Default::default()
            }),
        ),
        Arc::new(EchoService),
    );
    let result = proxy.invoke(vec![Value::String("hello".to_owned())]).await?;
    tracing::info!("result : {result}");
    Ok(())
}
