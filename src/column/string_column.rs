use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of UTF-8 strings
#[derive(Debug, Clone)]
pub struct StringColumn {
    pub(crate) data: Arc<[String]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl StringColumn {
    /// Create a column without nulls
    pub fn new(data: Vec<String>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: None,
        }
    }

    /// Create a named column without nulls
    pub fn with_name(data: Vec<String>, name: impl Into<String>) -> Self {
        let mut col = Self::new(data);
        col.name = Some(name.into());
        col
    }

    /// Create a column whose `nulls` flags mark null positions
    pub fn with_nulls(data: Vec<String>, nulls: Vec<bool>) -> Self {
        let mut col = Self::new(data);
        col.null_mask = utils::null_mask(&nulls);
        col
    }

    /// Create a column from optional values
    pub fn from_options(values: Vec<Option<String>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data = values.into_iter().map(Option::unwrap_or_default).collect();
        Self::with_nulls(data, nulls)
    }

    /// Convenience constructor from string slices
    pub fn from_strs(values: &[&str]) -> Self {
        Self::new(values.iter().map(|s| s.to_string()).collect())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }
        Ok(self.value(index))
    }

    /// Element at `index`, `None` when null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> Option<&str> {
        let raw = &self.data[index];
        match &self.null_mask {
            Some(mask) if utils::is_set(mask, index) => None,
            _ => Some(raw.as_str()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.data.len()).map(move |i| self.value(i))
    }

    /// Concatenation of the non-null values, `None` when there are none
    pub fn sum(&self) -> Option<String> {
        self.iter().flatten().fold(None, |acc: Option<String>, v| {
            let mut s = acc.unwrap_or_default();
            s.push_str(v);
            Some(s)
        })
    }

    pub fn min(&self) -> Option<&str> {
        self.iter().flatten().min()
    }

    pub fn max(&self) -> Option<&str> {
        self.iter().flatten().max()
    }

    /// New column holding the elements at `indices`, in that order
    pub fn take(&self, indices: &[usize]) -> Self {
        let values = indices
            .iter()
            .map(|&i| self.value(i).map(str::to_string))
            .collect();
        let mut col = Self::from_options(values);
        col.name = self.name.clone();
        col
    }

    /// New column holding the elements in `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        let values = (from..to).map(|i| self.value(i).map(str::to_string)).collect();
        let mut col = Self::from_options(values);
        col.name = self.name.clone();
        col
    }
}

impl ColumnTrait for StringColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        self.value(index).is_none()
    }
}
