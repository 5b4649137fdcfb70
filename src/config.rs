//! Naming configuration for grouping results

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default name of the key column in a grouping result
pub const GROUP_KEY: &str = "key";

/// Default name of the value column in a grouping result
pub const GROUP_VALUE: &str = "value";

/// Column names used for grouping results
///
/// Can be loaded from TOML or JSON:
///
/// ```toml
/// key_name = "bucket"
/// value_name = "total"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub key_name: String,
    pub value_name: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            key_name: GROUP_KEY.to_string(),
            value_name: GROUP_VALUE.to_string(),
        }
    }
}

impl GroupingConfig {
    pub fn new(key_name: impl Into<String>, value_name: impl Into<String>) -> Result<Self> {
        let config = Self {
            key_name: key_name.into(),
            value_name: value_name.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Names must be non-empty and distinct
    pub fn validate(&self) -> Result<()> {
        if self.key_name.trim().is_empty() || self.value_name.trim().is_empty() {
            return Err(Error::Config("column names must not be empty".to_string()));
        }
        if self.key_name == self.value_name {
            return Err(Error::Config(format!(
                "key and value columns share the name '{}'",
                self.key_name
            )));
        }
        Ok(())
    }
}
