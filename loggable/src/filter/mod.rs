use std::collections::LinkedList;
use std::sync::Arc;

use serde_json::Value;

use crate::annotation::Loggable;
use crate::error::LoggableError;
use crate::BoxFuture;

/// Identity of a wrapped method plus the configuration attached to it when
/// the proxy was composed.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub class_name: String,
    pub method_name: String,
    pub loggable: Option<Loggable>,
}

impl MethodInfo {
    pub fn new(class_name: &str, method_name: &str, loggable: Option<Loggable>) -> Self {
        MethodInfo {
            class_name: class_name.to_owned(),
            method_name: method_name.to_owned(),
            loggable,
        }
    }

    pub fn get_key(&self) -> String {
        format!("{}.{}", self.class_name, self.method_name)
    }
}

/// A reified in-flight call. Lives for exactly one invocation.
#[derive(Debug)]
pub struct InvocationContext {
    pub unique_identifier: String,
    pub method_info: Arc<MethodInfo>,
    pub args: Vec<Value>,
    pub result: Option<Value>,
}

/// Terminal target of a filter chain: executes the wrapped call, setting
/// `result` on the context or returning the failure.
pub trait MethodInvoker: Send + Sync {
    fn invoke(&self, context: InvocationContext)
        -> BoxFuture<Result<InvocationContext, LoggableError>>;
}

pub trait InvocationFilter: Send + Sync {
    fn call(
        &'static self,
        join_point: ProceedingJoinPoint,
    ) -> BoxFuture<Result<InvocationContext, LoggableError>>;
}

/// Hands an invocation down a chain of filters and finally to the wrapped
/// call itself. Consumed by value; one `proceed` per join point.
pub struct ProceedingJoinPoint {
    filters: LinkedList<&'static dyn InvocationFilter>,
    target: Arc<dyn MethodInvoker>,
    pub context: InvocationContext,
}

impl ProceedingJoinPoint {
    pub fn new(
        filters: LinkedList<&'static dyn InvocationFilter>,
        target: Arc<dyn MethodInvoker>,
        context: InvocationContext,
    ) -> Self {
        ProceedingJoinPoint {
            filters,
            target,
            context,
        }
    }

    pub async fn proceed(mut self) -> Result<InvocationContext, LoggableError> {
        match self.filters.pop_front() {
            Some(filter) => filter.call(self).await,
            None => {
                let ProceedingJoinPoint {
                    target, context, ..
                } = self;
                target.invoke(context).await
            }
        }
    }

    /// For filters that complete the call themselves instead of proceeding.
    pub fn into_context(self) -> InvocationContext {
        self.context
    }
}
