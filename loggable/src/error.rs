use loggable_common::error::BoxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggableError {
    #[error("Error : {0}")]
    Error(BoxError),

    #[error("Method : {0}")]
    Method(String),

    #[error("Config : {0}")]
    Config(String),
}

impl From<BoxError> for LoggableError {
    fn from(error: BoxError) -> Self {
        LoggableError::Error(error)
    }
}
