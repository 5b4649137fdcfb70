//! Result container of a grouped reduction

use crate::column::Column;
use crate::config::{GroupingConfig, GROUP_KEY, GROUP_VALUE};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Two-column DataFrame (key, value) produced by a grouped reduction
///
/// The key column is also the frame's index. Renaming builds a new container
/// sharing the column buffers.
#[derive(Debug, Clone)]
pub struct GroupingDataFrame {
    key_name: String,
    value_name: String,
    frame: DataFrame,
}

impl GroupingDataFrame {
    /// Create a result with explicit column names
    pub fn new(
        key_name: impl Into<String>,
        value_name: impl Into<String>,
        keys: Column,
        values: Column,
    ) -> Result<Self> {
        let key_name = key_name.into();
        let value_name = value_name.into();

        let mut frame = DataFrame::new();
        frame.add_column(key_name.clone(), keys)?;
        frame.add_column(value_name.clone(), values)?;
        frame.set_index(&key_name)?;

        Ok(Self {
            key_name,
            value_name,
            frame,
        })
    }

    /// Create a result named `key` / `value`
    pub(crate) fn with_default_names(keys: Column, values: Column) -> Result<Self> {
        Self::new(GROUP_KEY, GROUP_VALUE, keys, values)
    }

    /// Rename both columns as configured
    pub fn with_config(self, config: &GroupingConfig) -> Result<Self> {
        self.with_names(config.key_name.clone(), config.value_name.clone())
    }

    /// Same data with both columns renamed
    pub fn with_names(
        self,
        key_name: impl Into<String>,
        value_name: impl Into<String>,
    ) -> Result<Self> {
        let (keys, values) = self.into_columns()?;
        Self::new(key_name, value_name, keys, values)
    }

    pub fn keys(&self) -> &Column {
        &self.frame.columns[0]
    }

    pub fn values(&self) -> &Column {
        &self.frame.columns[1]
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.frame.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying two-column frame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Same data with the key column renamed
    pub fn with_key_name(self, key_name: impl Into<String>) -> Result<Self> {
        let value_name = self.value_name.clone();
        let (keys, values) = self.into_columns()?;
        Self::new(key_name, value_name, keys, values)
    }

    /// Same data with the value column renamed
    pub fn with_value_name(self, value_name: impl Into<String>) -> Result<Self> {
        let key_name = self.key_name.clone();
        let (keys, values) = self.into_columns()?;
        Self::new(key_name, value_name, keys, values)
    }

    fn into_columns(self) -> Result<(Column, Column)> {
        let [keys, values]: [Column; 2] =
            self.frame.columns.try_into().map_err(|columns: Vec<Column>| {
                Error::InvalidOperation(format!(
                    "grouping result holds {} columns instead of 2",
                    columns.len()
                ))
            })?;
        Ok((keys, values))
    }
}

impl AsRef<DataFrame> for GroupingDataFrame {
    fn as_ref(&self) -> &DataFrame {
        &self.frame
    }
}
