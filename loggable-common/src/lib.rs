pub mod config;
pub mod date_util;
pub mod error;
pub mod logs;

pub type BoxFuture<T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send>>;
