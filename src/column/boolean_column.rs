use std::sync::Arc;

use crate::column::common::{utils, BitMask, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of booleans packed into a bitmask
#[derive(Debug, Clone)]
pub struct BooleanColumn {
    pub(crate) data: BitMask,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
    pub(crate) length: usize,
}

impl BooleanColumn {
    /// Create a column without nulls
    pub fn new(data: Vec<bool>) -> Self {
        Self {
            length: data.len(),
            data: BitMask::from_bools(&data),
            null_mask: None,
            name: None,
        }
    }

    /// Create a named column without nulls
    pub fn with_name(data: Vec<bool>, name: impl Into<String>) -> Self {
        let mut col = Self::new(data);
        col.name = Some(name.into());
        col
    }

    /// Create a column whose `nulls` flags mark null positions
    pub fn with_nulls(data: Vec<bool>, nulls: Vec<bool>) -> Self {
        let mut col = Self::new(data);
        col.null_mask = utils::null_mask(&nulls);
        col
    }

    /// Create a column from optional values
    pub fn from_options(values: Vec<Option<bool>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data = values.into_iter().map(Option::unwrap_or_default).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<Option<bool>> {
        if index >= self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.length,
            });
        }
        Ok(self.value(index))
    }

    /// Element at `index`, `None` when null
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> Option<bool> {
        assert!(index < self.length, "index {} out of bounds", index);
        match &self.null_mask {
            Some(mask) if utils::is_set(mask, index) => None,
            _ => Some(self.data.bit(index)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.length).map(move |i| self.value(i))
    }

    /// Number of `true` values, `None` when every element is null
    pub fn sum(&self) -> Option<i64> {
        self.iter()
            .flatten()
            .fold(None, |acc: Option<i64>, v| Some(acc.unwrap_or(0) + v as i64))
    }

    pub fn min(&self) -> Option<bool> {
        self.iter().flatten().min()
    }

    pub fn max(&self) -> Option<bool> {
        self.iter().flatten().max()
    }

    /// New column holding the elements at `indices`, in that order
    pub fn take(&self, indices: &[usize]) -> Self {
        let mut col = Self::from_options(indices.iter().map(|&i| self.value(i)).collect());
        col.name = self.name.clone();
        col
    }

    /// New column holding the elements in `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        let mut col = Self::from_options((from..to).map(|i| self.value(i)).collect());
        col.name = self.name.clone();
        col
    }
}

impl ColumnTrait for BooleanColumn {
    fn len(&self) -> usize {
        self.length
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Boolean
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        self.value(index).is_none()
    }
}
