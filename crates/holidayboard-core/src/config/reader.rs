use serde_json::{Map, Value};

use super::error::ConfigError;

/// Typed field access over one JSON holiday definition.
///
/// Every failure names the definition index and the JSON field, so the
/// loader never has to build error messages itself.
pub struct DefinitionReader<'a> {
    index: usize,
    object: &'a Map<String, Value>,
}

impl<'a> DefinitionReader<'a> {
    pub fn new(index: usize, value: &'a Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::MalformedDefinition {
            index,
            field: "holiday",
            reason: "must be a JSON object".to_string(),
        })?;
        Ok(Self { index, object })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn malformed(&self, field: &'static str, reason: impl Into<String>) -> ConfigError {
        ConfigError::MalformedDefinition {
            index: self.index,
            field,
            reason: reason.into(),
        }
    }

    fn present(&self, field: &'static str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, ConfigError> {
        self.present(field)
            .ok_or_else(|| self.malformed(field, "is missing"))
    }

    pub fn read_str(&self, field: &'static str) -> Result<&'a str, ConfigError> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| self.malformed(field, "must be a string"))
    }

    pub fn read_optional_str(&self, field: &'static str) -> Result<Option<&'a str>, ConfigError> {
        self.present(field)
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| self.malformed(field, "must be a string"))
            })
            .transpose()
    }

    pub fn read_bool(&self, field: &'static str) -> Result<bool, ConfigError> {
        self.required(field)?
            .as_bool()
            .ok_or_else(|| self.malformed(field, "must be a boolean"))
    }

    pub fn read_u8(&self, field: &'static str) -> Result<u8, ConfigError> {
        let value = self.required(field)?;
        value
            .as_u64()
            .and_then(|number| u8::try_from(number).ok())
            .ok_or_else(|| self.malformed(field, format!("must be an integer in 0..=255, got {value}")))
    }

    pub fn read_i32(&self, field: &'static str) -> Result<i32, ConfigError> {
        let value = self.required(field)?;
        value
            .as_i64()
            .and_then(|number| i32::try_from(number).ok())
            .ok_or_else(|| self.malformed(field, format!("must be a 32-bit integer, got {value}")))
    }

    /// Non-negative day count; absent means zero.
    pub fn read_days_or_zero(&self, field: &'static str) -> Result<u32, ConfigError> {
        let Some(value) = self.present(field) else {
            return Ok(0);
        };
        value
            .as_u64()
            .and_then(|number| u32::try_from(number).ok())
            .ok_or_else(|| {
                self.malformed(field, format!("must be a non-negative integer, got {value}"))
            })
    }

    pub fn read_optional_index(&self, field: &'static str) -> Result<Option<usize>, ConfigError> {
        self.present(field)
            .map(|value| {
                value
                    .as_u64()
                    .and_then(|number| usize::try_from(number).ok())
                    .ok_or_else(|| {
                        self.malformed(field, format!("must be a non-negative integer, got {value}"))
                    })
            })
            .transpose()
    }
}
