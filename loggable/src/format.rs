use serde_json::{Map, Value};

use crate::annotation::Loggable;
use crate::filter::InvocationContext;
use crate::record::LogRecord;

/// Builds the record for one intercepted call. The interceptor appends the
/// `result` and `time` entries afterwards.
pub trait LogFormatter: Send + Sync {
    fn format(&self, loggable: &Loggable, invocation: &InvocationContext) -> LogRecord;
}

/// Record shape of the original interceptor: the annotation supplies level
/// and name, the invocation supplies identity and arguments.
pub struct DefaultLogFormatter;

impl LogFormatter for DefaultLogFormatter {
    fn format(&self, loggable: &Loggable, invocation: &InvocationContext) -> LogRecord {
        let method_info = &invocation.method_info;
        let message = format!(
            "{}:{}.{}",
            loggable.name, method_info.class_name, method_info.method_name
        );
        let mut context = Map::new();
        context.insert(
            "class".to_owned(),
            Value::String(method_info.class_name.clone()),
        );
        context.insert(
            "method".to_owned(),
            Value::String(method_info.method_name.clone()),
        );
        context.insert("args".to_owned(), Value::Array(invocation.args.clone()));
        LogRecord::new(loggable.value, message, context)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::filter::MethodInfo;
    use crate::record::LogLevel;

    #[test]
    fn default_format_carries_identity_and_args() {
        let invocation = InvocationContext {
            unique_identifier: loggable_common::logs::get_uuid(),
            method_info: Arc::new(MethodInfo::new("UserService", "create", None)),
            args: vec![json!({ "name": "ada" })],
            result: None,
        };
        let record = DefaultLogFormatter.format(&Loggable::default(), &invocation);
        assert_eq!(record.level, LogLevel::Info);
        assert_eq!(record.message, "Loggable:UserService.create");
        assert_eq!(record.context["class"], json!("UserService"));
        assert_eq!(record.context["method"], json!("create"));
        assert_eq!(record.context["args"], json!([{ "name": "ada" }]));
    }
}
