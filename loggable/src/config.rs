use loggable_common::config::get_config_by_file;
use serde::{Deserialize, Serialize};

use crate::annotation::Loggable;
use crate::error::LoggableError;

/// Application-level configuration: the managed default channel plus
/// annotation-equivalents attached to methods from a static file instead of
/// code.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct LoggableApplicationConfig {
    default_channel: Option<String>,
    methods: Option<Vec<MethodConfig>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MethodConfig {
    class_name: String,
    method_name: String,
    #[serde(flatten)]
    loggable: Loggable,
}

impl LoggableApplicationConfig {
    pub fn from_file(path: &str) -> Result<Self, LoggableError> {
        get_config_by_file(path).map_err(|err| LoggableError::Config(err.to_string()))
    }

    pub fn get_default_channel(&self) -> &Option<String> {
        &self.default_channel
    }

    pub fn get_methods(&self) -> &Option<Vec<MethodConfig>> {
        &self.methods
    }
}

impl MethodConfig {
    pub fn new(class_name: &str, method_name: &str, loggable: Loggable) -> Self {
        MethodConfig {
            class_name: class_name.to_owned(),
            method_name: method_name.to_owned(),
            loggable,
        }
    }

    pub fn get_key(&self) -> String {
        format!("{}.{}", self.class_name, self.method_name)
    }

    pub fn get_loggable(&self) -> &Loggable {
        &self.loggable
    }
}
