use std::collections::LinkedList;
use std::sync::Arc;

use loggable_common::logs::get_uuid;
use serde_json::Value;

use crate::error::LoggableError;
use crate::filter::{
    InvocationContext, InvocationFilter, MethodInfo, MethodInvoker, ProceedingJoinPoint,
};

/// Composition-time stand-in for a woven proxy: holds the filter chain and
/// the terminal invoker for one wrapped method.
pub struct LoggableProxy {
    filters: LinkedList<&'static dyn InvocationFilter>,
    method_info: Arc<MethodInfo>,
    target: Arc<dyn MethodInvoker>,
}

impl LoggableProxy {
    pub(crate) fn new(
        filters: LinkedList<&'static dyn InvocationFilter>,
        method_info: Arc<MethodInfo>,
        target: Arc<dyn MethodInvoker>,
    ) -> Self {
        LoggableProxy {
            filters,
            method_info,
            target,
        }
    }

    pub fn get_method_info(&self) -> &MethodInfo {
        &self.method_info
    }

    pub async fn invoke(&self, args: Vec<Value>) -> Result<Value, LoggableError> {
        let context = InvocationContext {
            unique_identifier: get_uuid(),
            method_info: self.method_info.clone(),
            args,
            result: None,
        };
        let join_point =
            ProceedingJoinPoint::new(self.filters.clone(), self.target.clone(), context);
        let context = join_point.proceed().await?;
        Ok(context.result.unwrap_or(Value::Null))
    }
}
