use ::toml::Value;
use serde_json::json;

use crate::error::BoxError;

pub fn get_toml_by_context<T: serde::de::DeserializeOwned>(toml_context: &str) -> Result<T, BoxError> {
    let parsed_toml: Value = toml_context.parse()?;
    let json = json!(parsed_toml);
    Ok(T::deserialize(json).map_err(|err| format!("toml deserialize error {err:?}"))?)
}
