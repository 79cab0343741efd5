use std::fs;

use crate::error::BoxError;

pub mod toml;
pub mod yaml;

pub fn get_config_by_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, BoxError> {
    let contents = fs::read_to_string(path).map_err(|err| format!("read {path:?} error : {err:?}"))?;
    match path.rsplit('.').next() {
        Some("toml") => self::toml::get_toml_by_context(&contents),
        Some("yaml") | Some("yml") => self::yaml::get_yaml_by_context(&contents),
        file_type => Err(format!("not support {file_type:?}").into()),
    }
}
